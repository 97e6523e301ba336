//! Canonical questionnaire record shapes.
//!
//! Every field a respondent may skip is optional, and every map
//! defaults to empty, so partially filled store rows deserialize
//! without ceremony. The scorer treats anything absent as a zero
//! contribution rather than an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod legacy;

/// Identifier wrapper for questionnaire owners.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// One MBTI dimension as reported by the personality test: the winning
/// letter plus how decisively it won.
///
/// `percentage` sits in [50,100] and is only comparable between two
/// respondents who share the same `letter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbtiDimension {
    #[serde(rename = "type")]
    pub letter: char,
    pub percentage: u8,
}

/// Structured MBTI result across the five dimensions. A dimension the
/// respondent never answered stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbtiProfile {
    #[serde(default)]
    pub energy: Option<MbtiDimension>,
    #[serde(default)]
    pub mind: Option<MbtiDimension>,
    #[serde(default)]
    pub nature: Option<MbtiDimension>,
    #[serde(default)]
    pub tactics: Option<MbtiDimension>,
    #[serde(default)]
    pub identity: Option<MbtiDimension>,
}

impl MbtiProfile {
    pub const DIMENSION_COUNT: usize = 5;

    /// Dimensions in canonical order for iteration by the scorer.
    pub fn dimensions(&self) -> [&Option<MbtiDimension>; Self::DIMENSION_COUNT] {
        [
            &self.energy,
            &self.mind,
            &self.nature,
            &self.tactics,
            &self.identity,
        ]
    }

    /// Five-letter type code for display, `?` for unanswered dimensions
    /// (e.g. `INTJA`, `EN?PT`).
    pub fn type_code(&self) -> String {
        self.dimensions()
            .iter()
            .map(|dimension| dimension.map(|d| d.letter).unwrap_or('?'))
            .collect()
    }
}

/// Sub-trait scores for one Big Five trait group, keyed by sub-trait
/// name with values in [0,20]. The canonical schema carries six
/// sub-traits per group but the scorer works over whatever keys are
/// present.
pub type TraitGroup = BTreeMap<String, u8>;

/// Big Five inventory grouped the way the upstream test reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigFiveProfile {
    #[serde(default)]
    pub neuroticism: Option<TraitGroup>,
    #[serde(default)]
    pub extraversion: Option<TraitGroup>,
    #[serde(default)]
    pub openness: Option<TraitGroup>,
    #[serde(default)]
    pub agreeableness: Option<TraitGroup>,
    #[serde(default)]
    pub conscientiousness: Option<TraitGroup>,
}

impl BigFiveProfile {
    pub const GROUP_COUNT: usize = 5;

    /// Trait groups in canonical order for iteration by the scorer.
    pub fn groups(&self) -> [&Option<TraitGroup>; Self::GROUP_COUNT] {
        [
            &self.neuroticism,
            &self.extraversion,
            &self.openness,
            &self.agreeableness,
            &self.conscientiousness,
        ]
    }
}

/// Percentage distribution captured from a constrained-slider question:
/// fixed keys mapped to non-negative weights that should (but are not
/// guaranteed to) sum to 100.
pub type Distribution = BTreeMap<String, u32>;

/// Sleep, screen time, and social-circle answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalSocial {
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    /// Enum 0-3 (early bird through night owl).
    #[serde(default)]
    pub sleep_schedule: Option<u8>,
    #[serde(default)]
    pub screen_hours_weekly: Option<u32>,
    /// Enum 0-3.
    #[serde(default)]
    pub new_people_weekly: Option<u8>,
    /// Enum 0-3.
    #[serde(default)]
    pub close_friends: Option<u8>,
    #[serde(default)]
    pub friends_met: Distribution,
    #[serde(default)]
    pub interaction_method: Distribution,
    #[serde(default)]
    pub social_time: Distribution,
}

/// Hobby and music answers. The free-text fields are shown on profiles
/// but never scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interests {
    #[serde(default)]
    pub hobbies_categories: Distribution,
    #[serde(default)]
    pub music_genres: Distribution,
    #[serde(default)]
    pub hobbies_list: Option<String>,
    #[serde(default)]
    pub music_subgenres: Option<String>,
}

/// Lightweight icebreaker answers: eight small-enum questions, a lucky
/// number in [0,9999], and a favorite color as `#RRGGBB`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunQuestions {
    #[serde(default)]
    pub time_or_money: Option<u8>,
    #[serde(default)]
    pub travel_or_friends: Option<u8>,
    #[serde(default)]
    pub know_future: Option<u8>,
    #[serde(default)]
    pub reborn_gender: Option<u8>,
    #[serde(default)]
    pub fictional_world: Option<u8>,
    #[serde(default)]
    pub lose_sense: Option<u8>,
    #[serde(default)]
    pub afterlife: Option<u8>,
    #[serde(default)]
    pub lifespan: Option<u8>,
    #[serde(default)]
    pub lucky_number: Option<u32>,
    #[serde(default)]
    pub favorite_color: Option<String>,
}

impl FunQuestions {
    /// The eight exact-match answers in scoring order.
    pub fn exact_match_answers(&self) -> [Option<u8>; 8] {
        [
            self.time_or_money,
            self.travel_or_friends,
            self.know_future,
            self.reborn_gender,
            self.fictional_world,
            self.lose_sense,
            self.afterlife,
            self.lifespan,
        ]
    }
}

/// Canonical questionnaire record: one per user, immutable input to the
/// scorer. Legacy store rows are converted by
/// [`legacy::LegacySetupResponse`] before they reach scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireRecord {
    #[serde(default)]
    pub mbti: Option<MbtiProfile>,
    #[serde(default)]
    pub big_five: Option<BigFiveProfile>,
    #[serde(default)]
    pub lifestyle_personal_social: Option<PersonalSocial>,
    #[serde(default)]
    pub lifestyle_interests: Option<Interests>,
    #[serde(default)]
    pub lifestyle_fun_questions: Option<FunQuestions>,
}

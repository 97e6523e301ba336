//! Adapter for the first-generation setup rows.
//!
//! Early records stored a flat `mbti_type` string (e.g. `"INTJ-A
//! Architect"`), a flat `sleep_hours`, and free string lists for pets,
//! sports, and hobbies. This module maps that shape onto the canonical
//! [`QuestionnaireRecord`] so the scorer never branches on record
//! vintage. Unparseable pieces are dropped rather than rejected,
//! matching the scorer's zero-contribution policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    BigFiveProfile, Distribution, Interests, MbtiDimension, MbtiProfile, PersonalSocial,
    QuestionnaireRecord,
};

/// The legacy survey never captured dimension percentages; 50 is the
/// bottom of the meaningful range, so two identical legacy types still
/// score a zero difference.
pub const LEGACY_MBTI_PERCENTAGE: u8 = 50;

const DIMENSION_LETTERS: [[char; 2]; 5] = [
    ['E', 'I'], // energy
    ['S', 'N'], // mind
    ['T', 'F'], // nature
    ['J', 'P'], // tactics
    ['A', 'T'], // identity
];

/// Legacy `setup_responses` row shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacySetupResponse {
    #[serde(default)]
    pub mbti_type: Option<String>,
    #[serde(default)]
    pub big_five: Option<BigFiveProfile>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub pets: Vec<String>,
    #[serde(default)]
    pub sports: Vec<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

impl LegacySetupResponse {
    /// Convert into the canonical record, discarding whatever cannot be
    /// represented.
    pub fn into_canonical(self) -> QuestionnaireRecord {
        let mbti = self.mbti_type.as_deref().and_then(parse_mbti_type);

        let lifestyle_personal_social = self.sleep_hours.map(|sleep_hours| PersonalSocial {
            sleep_hours: Some(sleep_hours),
            ..PersonalSocial::default()
        });

        let interest_distribution =
            interest_distribution(&[&self.pets, &self.sports, &self.hobbies]);
        let lifestyle_interests = if interest_distribution.is_empty() {
            None
        } else {
            Some(Interests {
                hobbies_categories: interest_distribution,
                ..Interests::default()
            })
        };

        QuestionnaireRecord {
            mbti,
            big_five: self.big_five,
            lifestyle_personal_social,
            lifestyle_interests,
            lifestyle_fun_questions: None,
        }
    }
}

impl From<LegacySetupResponse> for QuestionnaireRecord {
    fn from(legacy: LegacySetupResponse) -> Self {
        legacy.into_canonical()
    }
}

/// Parse strings like `"INTJ-A Architect"` or `"enfp-t"` into a full
/// profile. Returns `None` unless all five letters are valid for their
/// dimension.
pub fn parse_mbti_type(raw: &str) -> Option<MbtiProfile> {
    let code = raw.split_whitespace().next()?;
    let (stem, identity) = code.split_once('-')?;
    let mut letters: Vec<char> = stem.chars().map(|c| c.to_ascii_uppercase()).collect();
    letters.extend(identity.chars().map(|c| c.to_ascii_uppercase()));
    if letters.len() != 5 {
        return None;
    }

    let mut dimensions = [None; 5];
    for (slot, (letter, allowed)) in dimensions
        .iter_mut()
        .zip(letters.iter().zip(DIMENSION_LETTERS.iter()))
    {
        if !allowed.contains(letter) {
            return None;
        }
        *slot = Some(MbtiDimension {
            letter: *letter,
            percentage: LEGACY_MBTI_PERCENTAGE,
        });
    }

    let [energy, mind, nature, tactics, identity] = dimensions;
    Some(MbtiProfile {
        energy,
        mind,
        nature,
        tactics,
        identity,
    })
}

/// Fold the legacy interest lists into one equal-weight distribution
/// summing to roughly 100, so overlap between two legacy records is
/// scored by the distribution kernel the way the old set-overlap
/// comparison behaved.
fn interest_distribution(lists: &[&Vec<String>]) -> Distribution {
    let mut keys: Vec<String> = lists
        .iter()
        .flat_map(|list| list.iter())
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect();
    keys.sort();
    keys.dedup();

    if keys.is_empty() {
        return BTreeMap::new();
    }

    let weight = (100 / keys.len() as u32).max(1);
    keys.into_iter().map(|key| (key, weight)).collect()
}

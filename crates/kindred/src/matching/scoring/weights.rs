use serde::{Deserialize, Serialize};

/// Weight configuration for the similarity score.
///
/// Defaults encode the product weighting: personality averages two
/// 50-point tests and doubles to 100; lifestyle splits its 100 points
/// 40/40/20 across personal & social, interests, and fun questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub mbti_max: f64,
    pub big_five_max: f64,
    pub personal_social: PersonalSocialWeights,
    pub interests: InterestsWeights,
    pub fun_questions: FunQuestionWeights,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            mbti_max: 50.0,
            big_five_max: 50.0,
            personal_social: PersonalSocialWeights::default(),
            interests: InterestsWeights::default(),
            fun_questions: FunQuestionWeights::default(),
        }
    }
}

/// Per-question weights inside the 40-point personal & social section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalSocialWeights {
    pub sleep_hours: f64,
    pub sleep_schedule: f64,
    pub screen_hours: f64,
    pub new_people: f64,
    pub close_friends: f64,
    pub friends_met: f64,
    pub interaction_method: f64,
    pub social_time: f64,
}

impl Default for PersonalSocialWeights {
    fn default() -> Self {
        Self {
            sleep_hours: 5.0,
            sleep_schedule: 3.0,
            screen_hours: 4.0,
            new_people: 3.0,
            close_friends: 3.0,
            friends_met: 8.0,
            interaction_method: 7.0,
            social_time: 7.0,
        }
    }
}

/// The 40-point interests section: two 20-point distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestsWeights {
    pub hobbies_categories: f64,
    pub music_genres: f64,
}

impl Default for InterestsWeights {
    fn default() -> Self {
        Self {
            hobbies_categories: 20.0,
            music_genres: 20.0,
        }
    }
}

/// Fun questions: `total` split evenly across `slots` two-point
/// questions (eight exact matches, the lucky number, and the color).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunQuestionWeights {
    pub total: f64,
    pub slots: u32,
}

impl FunQuestionWeights {
    pub fn per_question(&self) -> f64 {
        if self.slots == 0 {
            0.0
        } else {
            self.total / self.slots as f64
        }
    }
}

impl Default for FunQuestionWeights {
    fn default() -> Self {
        Self {
            total: 20.0,
            slots: 10,
        }
    }
}

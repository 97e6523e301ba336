//! The similarity scorer: a pure, total, symmetric function from two
//! questionnaire records to a weighted score breakdown.
//!
//! Personality and lifestyle each contribute up to 100 points. A
//! section missing on either side degrades to a zero contribution;
//! nothing here ever fails.

pub(crate) mod kernels;
mod lifestyle;
mod personality;
pub mod weights;

pub use kernels::{
    BIG_FIVE_DECAY, BIG_FIVE_TRAIT_CEILING, COLOR_HUE_WEIGHT, COLOR_LIGHTNESS_WEIGHT,
    COLOR_SATURATION_WEIGHT, DISTRIBUTION_DECAY, LUCKY_NUMBER_DECAY, MBTI_PERCENT_DECAY,
    SCREEN_HOURS_DECAY, SLEEP_HOURS_DECAY,
};

use serde::{Deserialize, Serialize};

use super::questionnaire::QuestionnaireRecord;
use weights::ScoringWeights;

/// Stateless scorer applying a weight configuration to record pairs.
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a pair of records. Symmetric and deterministic.
    pub fn score(&self, a: &QuestionnaireRecord, b: &QuestionnaireRecord) -> ScoreBreakdown {
        let mut personality_tests = Vec::with_capacity(2);

        let mbti = match (&a.mbti, &b.mbti) {
            (Some(mbti_a), Some(mbti_b)) => {
                let score = personality::mbti_score(mbti_a, mbti_b, self.weights.mbti_max);
                personality_tests.push(score);
                score
            }
            _ => 0.0,
        };

        let big_five = match (&a.big_five, &b.big_five) {
            (Some(five_a), Some(five_b)) => {
                let score = personality::big_five_score(five_a, five_b, self.weights.big_five_max);
                personality_tests.push(score);
                score
            }
            _ => 0.0,
        };

        // Average the tests both users took, then scale the 0-50 mean
        // up to the 100-point personality half.
        let personality = if personality_tests.is_empty() {
            0.0
        } else {
            personality_tests.iter().sum::<f64>() / personality_tests.len() as f64 * 2.0
        };

        let personal_social = lifestyle::personal_social_score(
            a.lifestyle_personal_social.as_ref(),
            b.lifestyle_personal_social.as_ref(),
            &self.weights.personal_social,
        );
        let interests = lifestyle::interests_score(
            a.lifestyle_interests.as_ref(),
            b.lifestyle_interests.as_ref(),
            &self.weights.interests,
        );
        let fun_questions = lifestyle::fun_questions_score(
            a.lifestyle_fun_questions.as_ref(),
            b.lifestyle_fun_questions.as_ref(),
            &self.weights.fun_questions,
        );
        let lifestyle = personal_social + interests + fun_questions;

        let personality_score = personality.round() as u32;
        let lifestyle_score = lifestyle.round() as u32;

        ScoreBreakdown {
            personality_score,
            lifestyle_score,
            total_score: personality_score + lifestyle_score,
            breakdown: SectionScores {
                mbti,
                big_five,
                personal_social,
                interests,
                fun_questions,
            },
        }
    }
}

/// Score two records with the default product weights.
pub fn calculate_similarity(a: &QuestionnaireRecord, b: &QuestionnaireRecord) -> ScoreBreakdown {
    ScoringEngine::default().score(a, b)
}

/// Weighted similarity result. Rounding happens only here, at the
/// outermost scores; section sub-scores stay fractional for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// 0-100.
    pub personality_score: u32,
    /// 0-100.
    pub lifestyle_score: u32,
    /// 0-200, always `personality_score + lifestyle_score`.
    pub total_score: u32,
    pub breakdown: SectionScores,
}

/// Unscaled per-section sub-scores backing the UI breakdown panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScores {
    /// 0-50.
    pub mbti: f64,
    /// 0-50.
    pub big_five: f64,
    /// 0-40.
    pub personal_social: f64,
    /// 0-40.
    pub interests: f64,
    /// 0-20.
    pub fun_questions: f64,
}

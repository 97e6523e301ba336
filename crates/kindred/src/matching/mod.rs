//! Questionnaire matching: canonical record types, the pure similarity
//! scorer, and the service facade that compares and ranks users backed
//! by an external record store.

pub mod questionnaire;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use questionnaire::legacy::LegacySetupResponse;
pub use questionnaire::{
    BigFiveProfile, FunQuestions, Interests, MbtiDimension, MbtiProfile, PersonalSocial,
    QuestionnaireRecord, UserId,
};
pub use router::matching_router;
pub use scoring::{calculate_similarity, ScoreBreakdown, ScoringEngine, SectionScores};
pub use scoring::weights::ScoringWeights;
pub use service::{
    ComparisonView, MatchQuery, MatchService, MatchServiceError, SortKey, SortOrder,
};
pub use store::{MatchStore, PublicProfile, SetupRecord, StoreError};

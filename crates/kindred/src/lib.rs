//! Kindred core library: questionnaire records, the similarity scoring
//! engine, and the match service that ranks users against each other.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::questionnaire::{QuestionnaireRecord, UserId};

/// A user's questionnaire row as the backing store holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupRecord {
    pub user_id: UserId,
    pub questionnaire: QuestionnaireRecord,
    /// Only complete setups participate in comparisons.
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl SetupRecord {
    pub fn complete(user_id: UserId, questionnaire: QuestionnaireRecord) -> Self {
        Self {
            user_id,
            questionnaire,
            is_complete: true,
            completed_at: Some(Utc::now()),
        }
    }
}

/// Public-facing profile row; everything beyond the id is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProfile {
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Read-only abstraction over the hosted backend holding setups and
/// profiles, so the match service can be exercised in isolation.
pub trait MatchStore: Send + Sync {
    fn fetch_setup(&self, id: &UserId) -> Result<Option<SetupRecord>, StoreError>;
    fn fetch_profile(&self, id: &UserId) -> Result<Option<PublicProfile>, StoreError>;
    /// All complete setups other than the given user's, in no
    /// particular order.
    fn completed_setups_except(&self, id: &UserId) -> Result<Vec<SetupRecord>, StoreError>;
}

/// Error enumeration for store failures. Absence of a record is not an
/// error; it surfaces as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

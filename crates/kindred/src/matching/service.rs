use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::questionnaire::UserId;
use super::scoring::{weights::ScoringWeights, ScoreBreakdown, ScoringEngine};
use super::store::{MatchStore, PublicProfile, SetupRecord, StoreError};

/// Hard ceiling on ranked results, matching the comparison UI.
pub const RESULT_CAP: usize = 50;
/// Result count used when a query does not ask for one.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Service composing the record store and the scoring engine.
pub struct MatchService<S> {
    store: Arc<S>,
    engine: Arc<ScoringEngine>,
    result_cap: usize,
}

impl<S> MatchService<S>
where
    S: MatchStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_weights(store, ScoringWeights::default())
    }

    pub fn with_weights(store: Arc<S>, weights: ScoringWeights) -> Self {
        Self {
            store,
            engine: Arc::new(ScoringEngine::new(weights)),
            result_cap: RESULT_CAP,
        }
    }

    /// Lower the ranked-result ceiling below [`RESULT_CAP`].
    pub fn with_result_cap(mut self, cap: usize) -> Self {
        self.result_cap = cap.clamp(1, RESULT_CAP);
        self
    }

    /// Compare the viewer directly against one target user.
    pub fn compare(
        &self,
        viewer: &UserId,
        target: &UserId,
    ) -> Result<ComparisonView, MatchServiceError> {
        let viewer_setup = self.complete_setup(viewer)?.ok_or_else(|| {
            MatchServiceError::ViewerSetupIncomplete {
                viewer: viewer.clone(),
            }
        })?;
        let target_setup = self.complete_setup(target)?.ok_or_else(|| {
            MatchServiceError::TargetSetupMissing {
                target: target.clone(),
            }
        })?;

        let scores = self
            .engine
            .score(&viewer_setup.questionnaire, &target_setup.questionnaire);
        let profile = self.store.fetch_profile(target)?;

        Ok(ComparisonView {
            user_id: target_setup.user_id,
            profile,
            scores,
        })
    }

    /// Rank every other completed setup against the viewer and return
    /// the best (or worst) `limit` matches.
    pub fn find_matches(
        &self,
        viewer: &UserId,
        query: MatchQuery,
    ) -> Result<Vec<ComparisonView>, MatchServiceError> {
        let viewer_setup = self.complete_setup(viewer)?.ok_or_else(|| {
            MatchServiceError::ViewerSetupIncomplete {
                viewer: viewer.clone(),
            }
        })?;

        let candidates = self.store.completed_setups_except(viewer)?;
        let mut ranked: Vec<(SetupRecord, ScoreBreakdown)> = candidates
            .into_iter()
            .filter(|candidate| candidate.is_complete)
            .map(|candidate| {
                let scores = self
                    .engine
                    .score(&viewer_setup.questionnaire, &candidate.questionnaire);
                (candidate, scores)
            })
            .collect();

        // User id breaks score ties so repeated queries return an
        // identical order.
        ranked.sort_by(|(record_a, scores_a), (record_b, scores_b)| {
            let by_score = query.sort_by.key(scores_a).cmp(&query.sort_by.key(scores_b));
            let by_score = match query.order {
                SortOrder::Ascending => by_score,
                SortOrder::Descending => by_score.reverse(),
            };
            by_score.then_with(|| record_a.user_id.cmp(&record_b.user_id))
        });

        let limit = query.limit.clamp(1, self.result_cap);
        ranked.truncate(limit);

        ranked
            .into_iter()
            .map(|(record, scores)| {
                let profile = self.store.fetch_profile(&record.user_id)?;
                Ok(ComparisonView {
                    user_id: record.user_id,
                    profile,
                    scores,
                })
            })
            .collect()
    }

    fn complete_setup(&self, id: &UserId) -> Result<Option<SetupRecord>, MatchServiceError> {
        let setup = self.store.fetch_setup(id)?;
        Ok(setup.filter(|record| record.is_complete))
    }
}

/// One scored comparison against a target user, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<PublicProfile>,
    pub scores: ScoreBreakdown,
}

/// Ranked-search parameters. Defaults mirror the comparison page: top
/// ten by total score, most similar first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchQuery {
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub order: SortOrder,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}

impl Default for MatchQuery {
    fn default() -> Self {
        Self {
            sort_by: SortKey::default(),
            order: SortOrder::default(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

/// Which score ranks the candidate list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Total,
    Personality,
    Lifestyle,
}

impl SortKey {
    fn key(self, scores: &ScoreBreakdown) -> u32 {
        match self {
            SortKey::Total => scores.total_score,
            SortKey::Personality => scores.personality_score,
            SortKey::Lifestyle => scores.lifestyle_score,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Error raised by the match service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error("user {} has not completed their questionnaire", viewer.0)]
    ViewerSetupIncomplete { viewer: UserId },
    #[error("user {} was not found or has not completed their questionnaire", target.0)]
    TargetSetupMissing { target: UserId },
    #[error(transparent)]
    Store(#[from] StoreError),
}

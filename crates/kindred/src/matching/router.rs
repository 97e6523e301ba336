use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::questionnaire::UserId;
use super::service::{MatchQuery, MatchService, MatchServiceError};
use super::store::MatchStore;

/// Router builder exposing HTTP endpoints for direct comparison and
/// ranked match search.
pub fn matching_router<S>(service: Arc<MatchService<S>>) -> Router
where
    S: MatchStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/matching/comparisons/:viewer_id/:target_id",
            get(comparison_handler::<S>),
        )
        .route(
            "/api/v1/matching/:viewer_id/matches",
            post(matches_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn comparison_handler<S>(
    State(service): State<Arc<MatchService<S>>>,
    Path((viewer_id, target_id)): Path<(String, String)>,
) -> Response
where
    S: MatchStore + 'static,
{
    let viewer = UserId(viewer_id);
    let target = UserId(target_id);

    match service.compare(&viewer, &target) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn matches_handler<S>(
    State(service): State<Arc<MatchService<S>>>,
    Path(viewer_id): Path<String>,
    query: Option<axum::Json<MatchQuery>>,
) -> Response
where
    S: MatchStore + 'static,
{
    let viewer = UserId(viewer_id);
    let query = query.map(|axum::Json(query)| query).unwrap_or_default();

    match service.find_matches(&viewer, query) {
        Ok(matches) => (
            StatusCode::OK,
            axum::Json(json!({
                "count": matches.len(),
                "matches": matches,
            })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: MatchServiceError) -> Response {
    let status = match &error {
        MatchServiceError::ViewerSetupIncomplete { .. } => StatusCode::PRECONDITION_FAILED,
        MatchServiceError::TargetSetupMissing { .. } => StatusCode::NOT_FOUND,
        MatchServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

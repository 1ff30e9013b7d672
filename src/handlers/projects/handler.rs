//! Project handler implementations

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::Claims,
    services::{ProjectService, UpdateOutcome},
    state::AppState,
};

use super::request::UpdateProjectRequest;

/// Update a project owned by the caller.
///
/// Responds 204 on success and 404 when the project is missing or owned by
/// another account; the two cases are indistinguishable on purpose.
pub async fn update_project(
    State(state): State<AppState>,
    claims: Claims,
    Path(project_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(body) = body?;

    let payload = UpdateProjectRequest::merge(body, &claims.user_id, &project_id)?;
    payload.validate()?;

    match ProjectService::update_project(state.projects(), payload).await? {
        UpdateOutcome::Updated => Ok(StatusCode::NO_CONTENT),
        UpdateOutcome::NotFound => Err(AppError::NotFound),
    }
}

/// Placeholder for project routes whose controllers are not mounted here
pub async fn not_implemented() -> AppError {
    AppError::NotImplemented
}

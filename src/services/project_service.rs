//! Project service

use anyhow::anyhow;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    db::repositories::ProjectStore,
    error::{AppError, AppResult},
    handlers::projects::request::UpdateProjectRequest,
    models::ProjectChanges,
    utils::{format_sql_timestamp, now_utc_seconds},
};

/// Result of an ownership-scoped update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Exactly one row matched id and owner
    Updated,
    /// Nothing matched: the project is missing or owned by someone else
    NotFound,
}

/// Project service for business logic
pub struct ProjectService;

impl ProjectService {
    /// Update a project owned by the payload's `userId`.
    ///
    /// The payload must already have passed validation.
    pub async fn update_project(
        store: &dyn ProjectStore,
        payload: UpdateProjectRequest,
    ) -> AppResult<UpdateOutcome> {
        let project_id = parse_id(&payload.project_id)?;
        let owner_id = parse_id(&payload.user_id)?;

        if payload.rewards.as_ref().is_some_and(|r| !r.is_empty()) {
            debug!(project_id = %project_id, "Rewards in update payload are not persisted");
        }

        let changes = ProjectChanges {
            title: payload.title,
            subtitle: payload.subtitle,
            category: payload.category,
            ubication: payload.ubication,
            image_url: payload.image_url,
            video_url: payload.video_url,
            prize: payload.prize,
            duration: payload.duration,
            text: payload.text,
            updated_at: now_utc_seconds(),
        };

        let mut conn = store.acquire().await?;
        let affected = conn.update_owned(&project_id, &owner_id, &changes).await;
        drop(conn);

        match affected? {
            1 => {
                info!(
                    project_id = %project_id,
                    user_id = %owner_id,
                    updated_at = %format_sql_timestamp(&changes.updated_at),
                    "Project updated"
                );
                Ok(UpdateOutcome::Updated)
            }
            0 => {
                debug!(project_id = %project_id, user_id = %owner_id, "No owned project matched update");
                Ok(UpdateOutcome::NotFound)
            }
            n => Err(AppError::Internal(anyhow!(
                "update of project {project_id} affected {n} rows"
            ))),
        }
    }
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| AppError::InvalidPayload(e.to_string()))
}

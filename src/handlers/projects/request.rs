//! Project request DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::{
    constants::{
        rewards::{
            MAX_MONTH_LENGTH as MAX_REWARD_MONTH_LENGTH,
            MAX_SUBTITLE_LENGTH as MAX_REWARD_SUBTITLE_LENGTH,
            MAX_TITLE_LENGTH as MAX_REWARD_TITLE_LENGTH,
        },
        MAX_MEDIA_URL_LENGTH, MAX_PROJECT_TEXT_LENGTH, MAX_UBICATION_LENGTH,
    },
    error::{AppError, AppResult},
    utils::{
        deserialize::{non_null, number},
        validation::{
            validate_no_nul, validate_project_subtitle, validate_project_title, validate_uuid_v4,
        },
    },
};

/// Update project request, merged with the caller's claim and the path id.
///
/// Strings must be non-empty unless noted. Unknown fields are rejected.
/// Optional fields may be omitted but not sent as `null`; numbers may arrive
/// as numeric strings.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateProjectRequest {
    #[validate(custom(function = "validate_project_title"))]
    pub title: String,

    #[validate(custom(function = "validate_project_subtitle"))]
    pub subtitle: String,

    #[validate(length(min = 1), custom(function = "validate_no_nul"))]
    pub category: String,

    #[validate(
        length(min = 1, max = MAX_UBICATION_LENGTH),
        custom(function = "validate_no_nul")
    )]
    pub ubication: String,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(
        length(min = 1, max = MAX_MEDIA_URL_LENGTH),
        custom(function = "validate_no_nul")
    )]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(
        length(min = 1, max = MAX_MEDIA_URL_LENGTH),
        custom(function = "validate_no_nul")
    )]
    pub video_url: Option<String>,

    /// Funding goal
    #[serde(deserialize_with = "number")]
    pub prize: f64,

    /// Campaign length
    #[serde(deserialize_with = "number")]
    pub duration: f64,

    #[validate(
        length(min = 1, max = MAX_PROJECT_TEXT_LENGTH),
        custom(function = "validate_no_nul")
    )]
    pub text: String,

    /// Accepted and validated, but not written by the update path
    #[serde(default, deserialize_with = "non_null")]
    #[validate(nested)]
    pub rewards: Option<Vec<RewardRequest>>,

    #[serde(rename = "userId")]
    #[validate(custom(function = "validate_uuid_v4"))]
    pub user_id: String,

    #[serde(rename = "projectId")]
    #[validate(custom(function = "validate_uuid_v4"))]
    pub project_id: String,
}

/// Reward tier attached to a project
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RewardRequest {
    #[serde(deserialize_with = "number")]
    pub prize: f64,

    #[validate(
        length(min = 1, max = MAX_REWARD_TITLE_LENGTH),
        custom(function = "validate_no_nul")
    )]
    pub title: String,

    #[validate(
        length(min = 1, max = MAX_REWARD_MONTH_LENGTH),
        custom(function = "validate_no_nul")
    )]
    pub month: String,

    #[serde(deserialize_with = "number")]
    pub year: f64,

    #[validate(
        length(min = 1, max = MAX_REWARD_SUBTITLE_LENGTH),
        custom(function = "validate_no_nul")
    )]
    pub subtitle: String,
}

impl UpdateProjectRequest {
    /// Merge the JSON body with the claimed user id and the path project id.
    ///
    /// The claim and path values win over same-named body fields.
    pub fn merge(body: Value, user_id: &str, project_id: &str) -> AppResult<Self> {
        let Value::Object(mut fields) = body else {
            return Err(AppError::InvalidPayload(
                "request body must be a JSON object".to_string(),
            ));
        };

        fields.insert("userId".to_string(), Value::String(user_id.to_string()));
        fields.insert("projectId".to_string(), Value::String(project_id.to_string()));

        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

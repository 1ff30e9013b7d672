//! Input validation utilities
//!
//! Custom field predicates plugged into `#[derive(Validate)]` request types.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::constants::{MAX_PROJECT_SUBTITLE_LENGTH, MAX_PROJECT_TITLE_LENGTH};

/// Canonical hyphenated UUID, version 4, RFC 4122 variant
static UUID_V4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
    )
    .expect("UUID v4 pattern must compile")
});

/// Validate that a string is a version 4 UUID
pub fn validate_uuid_v4(value: &str) -> Result<(), ValidationError> {
    if UUID_V4.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("uuid_v4");
        err.message = Some("must be a valid GUID (uuidv4)".into());
        Err(err)
    }
}

/// Validate that a string carries no NUL characters, which text columns reject
pub fn validate_no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut err = ValidationError::new("no_nul");
        err.message = Some("must not contain NUL characters".into());
        return Err(err);
    }
    Ok(())
}

/// Validate project title length after trimming
pub fn validate_project_title(title: &str) -> Result<(), ValidationError> {
    validate_trimmed_length(title, 1, MAX_PROJECT_TITLE_LENGTH)
}

/// Validate project subtitle length after trimming
pub fn validate_project_subtitle(subtitle: &str) -> Result<(), ValidationError> {
    validate_trimmed_length(subtitle, 1, MAX_PROJECT_SUBTITLE_LENGTH)
}

fn validate_trimmed_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    validate_no_nul(value)?;
    let length = value.trim().chars().count();
    if length < min {
        let mut err = ValidationError::new("length");
        err.message = Some("is not allowed to be empty".into());
        err.add_param("min".into(), &min);
        return Err(err);
    }
    if length > max {
        let mut err = ValidationError::new("length");
        err.message = Some(format!("length must be less than or equal to {max} characters long").into());
        err.add_param("max".into(), &max);
        err.add_param("actual".into(), &length);
        return Err(err);
    }
    Ok(())
}

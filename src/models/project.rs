//! Project model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Project database model
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    /// Owning account
    pub user_id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub category: String,
    /// Where the project takes place
    pub ubication: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    /// Funding goal
    pub prize: f64,
    /// Campaign length
    pub duration: f64,
    pub text: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Mutable columns written by an ownership-scoped update.
///
/// Rewards are deliberately absent: the update path does not persist them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectChanges {
    pub title: String,
    pub subtitle: String,
    pub category: String,
    pub ubication: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub prize: f64,
    pub duration: f64,
    pub text: String,
    pub updated_at: NaiveDateTime,
}

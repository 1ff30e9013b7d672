//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new().merge(projects::routes(state))
}

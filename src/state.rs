//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{config::Config, db::repositories::ProjectStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Pooled project storage
    projects: Box<dyn ProjectStore>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(projects: impl ProjectStore + 'static, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                projects: Box::new(projects),
                config,
            }),
        }
    }

    /// Get the project store
    pub fn projects(&self) -> &dyn ProjectStore {
        self.inner.projects.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}

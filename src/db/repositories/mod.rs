//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod project_repo;

pub use project_repo::{PgProjectStore, ProjectConnection, ProjectStore};

#[cfg(test)]
pub use project_repo::MockProjectStore;

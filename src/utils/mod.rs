//! Utility functions

pub mod deserialize;
pub mod time;
pub mod validation;

pub use time::{format_sql_timestamp, now_utc_seconds};
pub use validation::{
    validate_no_nul, validate_project_subtitle, validate_project_title, validate_uuid_v4,
};

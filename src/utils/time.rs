//! Time utilities

use chrono::{NaiveDateTime, SubsecRound, Utc};

use crate::constants::SQL_TIMESTAMP_FORMAT;

/// Current UTC time truncated to whole seconds, as stored in timestamp columns
pub fn now_utc_seconds() -> NaiveDateTime {
    Utc::now().trunc_subsecs(0).naive_utc()
}

/// Format a column timestamp as `YYYY-MM-DD HH:MM:SS`
pub fn format_sql_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(SQL_TIMESTAMP_FORMAT).to_string()
}

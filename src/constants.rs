//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when neither `RUST_LOG` nor the config provide one
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// Column timestamp layout (UTC, seconds precision)
pub const SQL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// AUTHENTICATION
// =============================================================================

/// Authorization header scheme prefix
pub const BEARER_PREFIX: &str = "Bearer ";

// =============================================================================
// PROJECT VALIDATION
// =============================================================================

/// Maximum project title length (after trimming)
pub const MAX_PROJECT_TITLE_LENGTH: usize = 60;

/// Maximum project subtitle length (after trimming)
pub const MAX_PROJECT_SUBTITLE_LENGTH: usize = 135;

/// Maximum ubication (location) length
pub const MAX_UBICATION_LENGTH: u64 = 60;

/// Maximum image/video URL length
pub const MAX_MEDIA_URL_LENGTH: u64 = 512;

/// Maximum project body text length
pub const MAX_PROJECT_TEXT_LENGTH: u64 = 65536;

/// Reward field limits
pub mod rewards {
    pub const MAX_TITLE_LENGTH: u64 = 60;
    pub const MAX_MONTH_LENGTH: u64 = 20;
    pub const MAX_SUBTITLE_LENGTH: u64 = 135;
}

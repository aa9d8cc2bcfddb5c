//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Static Content
// =============================================================================

/// Directory served for any path not matched by the API
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Directory holding the landing page template
pub const DEFAULT_VIEWS_DIR: &str = "views";

/// Landing page file name inside the views directory
pub const INDEX_PAGE: &str = "index.html";

// =============================================================================
// Dates
// =============================================================================

/// Human-readable form used when returning exercise dates ("Mon Jan 01 2024")
pub const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

/// Calendar date layouts accepted from clients, tried in order
pub const ACCEPTED_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    DISPLAY_DATE_FORMAT,
    "%b %d %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Date-time layouts accepted from clients (only the date part is kept)
pub const ACCEPTED_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

// =============================================================================
// Error Messages
// =============================================================================

/// Returned when a user is created without a username
pub const MSG_USERNAME_REQUIRED: &str = "Username is required";

/// Returned when an id does not reference a known user
pub const MSG_USER_NOT_FOUND: &str = "User not found";

/// Returned when an exercise lacks its description or duration
pub const MSG_EXERCISE_FIELDS_REQUIRED: &str = "Description and duration are required";

/// Returned when a duration is not a positive whole number
pub const MSG_INVALID_DURATION: &str = "Duration must be a positive whole number";

/// Returned when an exercise date cannot be parsed
pub const MSG_INVALID_DATE: &str = "Invalid date";

//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Rounding precision
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;
pub const INDEX_DECIMAL_PLACES: u32 = 4;

// Timeline labels ("Jan 2024")
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";

// Employer switch label used when an employer id has no known name
pub const UNKNOWN_EMPLOYER_SWITCH_LABEL: &str = "Employer change";

// Fallback message for reasons without a dedicated text
pub const GENERIC_UNAVAILABLE_MESSAGE: &str = "Inflation projection unavailable.";

// Freshness scheduler defaults
pub const DEFAULT_SYNC_CRON: &str = "0 0 6 * * *"; // daily at 06:00
pub const DEFAULT_SYNC_JOB_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LOG_LEVEL: &str = "info";

//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for WageArc
///
/// Data gaps that a user can fix (no source selected, missing index months)
/// are not errors; they travel as
/// [`UnavailableReason`](crate::types::UnavailableReason) values inside
/// results. This enum covers failures of the collaborators themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum WageArcError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for WageArc operations
pub type Result<T> = std::result::Result<T, WageArcError>;

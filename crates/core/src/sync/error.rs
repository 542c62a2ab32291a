//! Errors raised while refreshing inflation data

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wagearc_domain::WageArcError;

/// Failure of an inflation feed
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum FetchError {
    /// The upstream service could not be reached
    #[error("Failed to reach inflation data service: {0}")]
    Unreachable(String),

    /// The response could not be parsed into index records
    #[error("Invalid inflation payload: {0}")]
    InvalidPayload(String),

    /// No fetcher knows this source code
    #[error("Unsupported inflation source: {0}")]
    UnsupportedSource(String),
}

/// Error type of the sync service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Storage(#[from] WageArcError),
}

/// Result type alias for sync operations
pub type SyncResult<T> = std::result::Result<T, SyncError>;

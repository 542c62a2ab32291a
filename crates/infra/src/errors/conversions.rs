//! Conversions from infrastructure and sync errors into domain errors.

use wagearc_core::{FetchError, SyncError};
use wagearc_domain::WageArcError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfraError(pub WageArcError);

impl std::fmt::Display for InfraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for InfraError {}

impl From<InfraError> for WageArcError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<WageArcError> for InfraError {
    fn from(value: WageArcError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoWageArcError {
    fn into_wagearc(self) -> WageArcError;
}

/* -------------------------------------------------------------------------- */
/* FetchError / SyncError → WageArcError */
/* -------------------------------------------------------------------------- */

impl IntoWageArcError for FetchError {
    fn into_wagearc(self) -> WageArcError {
        let description = self.to_string();
        match self {
            FetchError::Unreachable(_) => WageArcError::Network(description),
            FetchError::InvalidPayload(_) => WageArcError::Internal(description),
            FetchError::UnsupportedSource(_) => WageArcError::InvalidInput(description),
        }
    }
}

impl From<FetchError> for InfraError {
    fn from(value: FetchError) -> Self {
        InfraError(value.into_wagearc())
    }
}

impl IntoWageArcError for SyncError {
    fn into_wagearc(self) -> WageArcError {
        match self {
            SyncError::Fetch(err) => err.into_wagearc(),
            SyncError::Storage(err) => err,
        }
    }
}

impl From<SyncError> for InfraError {
    fn from(value: SyncError) -> Self {
        InfraError(value.into_wagearc())
    }
}

/* -------------------------------------------------------------------------- */
/* File and format errors → WageArcError */
/* -------------------------------------------------------------------------- */

impl IntoWageArcError for std::io::Error {
    fn into_wagearc(self) -> WageArcError {
        match self.kind() {
            std::io::ErrorKind::NotFound => WageArcError::NotFound(self.to_string()),
            _ => WageArcError::Config(format!("I/O failure: {self}")),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_wagearc())
    }
}

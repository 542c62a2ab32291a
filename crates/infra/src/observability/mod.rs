//! Tracing subscriber setup
//!
//! Installs a global `tracing` subscriber built from [`LoggingConfig`]:
//! an [`EnvFilter`] (with `RUST_LOG` taking precedence over the configured
//! level) and either the human-readable or the JSON `fmt` layer.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use wagearc_domain::{LoggingConfig, WageArcError};

use crate::errors::InfraError;

/// Install the global subscriber.
///
/// # Errors
/// Returns a `Config` error for an unparsable filter and an `Internal` error
/// when a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), InfraError> {
    let filter = build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok(), &config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };
    result.map_err(|e| InfraError(WageArcError::Internal(format!("Tracing already initialised: {e}"))))?;

    tracing::debug!(level = %config.level, json = config.json, "Tracing initialised");
    Ok(())
}

/// Filter from `env_directives` when present and non-empty, else `level`.
fn build_filter(env_directives: Option<String>, level: &str) -> Result<EnvFilter, InfraError> {
    let directives = env_directives.filter(|d| !d.trim().is_empty()).unwrap_or_else(|| level.to_string());
    EnvFilter::try_new(&directives).map_err(|e| {
        InfraError(WageArcError::Config(format!("Invalid log filter '{directives}': {e}")))
    })
}

//! Application configuration structures
//!
//! Loaded by `wagearc-infra::config`; every section has defaults so partial
//! files are accepted.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SYNC_CRON, DEFAULT_SYNC_JOB_TIMEOUT_SECS};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub inflation: InflationConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Inflation data settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationConfig {
    /// Source code preselected for users without a preference
    #[serde(default)]
    pub default_source: Option<String>,
}

/// Background refresh of inflation sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Six-field cron expression (with seconds)
    #[serde(default = "default_cron")]
    pub cron_expression: String,
    #[serde(default = "default_job_timeout")]
    pub job_timeout_seconds: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cron_expression: DEFAULT_SYNC_CRON.to_string(),
            job_timeout_seconds: DEFAULT_SYNC_JOB_TIMEOUT_SECS,
        }
    }
}

/// Tracing subscriber settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}

fn default_true() -> bool {
    true
}

fn default_cron() -> String {
    DEFAULT_SYNC_CRON.to_string()
}

fn default_job_timeout() -> u64 {
    DEFAULT_SYNC_JOB_TIMEOUT_SECS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

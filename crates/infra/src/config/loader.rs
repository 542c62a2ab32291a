//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `WAGEARC_SYNC_CRON`: Cron expression of the freshness job (required)
//! - `WAGEARC_SYNC_ENABLED`: Whether the freshness job runs (true/false)
//! - `WAGEARC_SYNC_JOB_TIMEOUT`: Per-run timeout in seconds
//! - `WAGEARC_DEFAULT_SOURCE`: Inflation source code preselected for new users
//! - `WAGEARC_LOG_LEVEL`: Default tracing filter
//! - `WAGEARC_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./wagearc.json` or `./wagearc.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use wagearc_domain::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SYNC_JOB_TIMEOUT_SECS};
use wagearc_domain::{Config, InflationConfig, LoggingConfig, Result, SyncConfig, WageArcError};

use crate::errors::InfraError;

static CONFIG_FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "wagearc.json", "wagearc.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `WageArcError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `WAGEARC_SYNC_CRON` is required; the remaining variables fall back
/// to the defaults of [`Config`].
///
/// # Errors
/// Returns `WageArcError::Config` if the cron expression is missing or a
/// numeric variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let cron_expression = env_var("WAGEARC_SYNC_CRON")?;
    let job_timeout_seconds = match std::env::var("WAGEARC_SYNC_JOB_TIMEOUT") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| WageArcError::Config(format!("Invalid sync job timeout: {}", e)))?,
        Err(_) => DEFAULT_SYNC_JOB_TIMEOUT_SECS,
    };

    let default_source = std::env::var("WAGEARC_DEFAULT_SOURCE").ok().filter(|s| !s.is_empty());
    let level = std::env::var("WAGEARC_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

    Ok(Config {
        inflation: InflationConfig { default_source },
        sync: SyncConfig {
            enabled: env_bool("WAGEARC_SYNC_ENABLED", true),
            cron_expression,
            job_timeout_seconds,
        },
        logging: LoggingConfig { level, json: env_bool("WAGEARC_LOG_JSON", false) },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `WageArcError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(WageArcError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            WageArcError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path).map_err(InfraError::from)?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| WageArcError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| WageArcError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(WageArcError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its two parents and the same
/// three levels around the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| {
            let here = CONFIG_FILE_NAMES.iter().map(move |name| root.join(name));
            let parents = ["..", "../.."].into_iter().flat_map(move |up| {
                CONFIG_FILE_NAMES[..2].iter().map(move |name| root.join(up).join(name))
            });
            here.chain(parents)
        })
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `WageArcError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        WageArcError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Returns `default` if the variable is not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

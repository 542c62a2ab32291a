//! # WageArc Infrastructure
//!
//! Runtime plumbing around the pure `wagearc-core` use cases.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON and TOML files)
//! - Tracing subscriber setup
//! - The cron scheduler keeping inflation data fresh
//! - Conversions from infrastructure errors into domain errors
//!
//! ## Architecture
//! - Depends on `wagearc-domain` and `wagearc-core`
//! - Contains all "impure" code (I/O, timers, global subscriber state)

pub mod config;
pub mod errors;
pub mod observability;
pub mod scheduling;

// Re-export commonly used items
pub use errors::InfraError;
pub use observability::init_tracing;
pub use scheduling::{FreshnessJob, FreshnessScheduler, FreshnessSchedulerConfig, SchedulerError};

//! Scheduling infrastructure for automated task execution
//!
//! The freshness scheduler refreshes stale inflation sources on a cron
//! schedule. It follows the runtime rules used across this crate:
//! - Explicit lifecycle management (start/stop)
//! - Join handles for spawned tasks
//! - Cancellation token support
//! - Timeout wrapping on all async operations

pub mod error;
pub mod freshness_scheduler;

pub use error::{SchedulerError, SchedulerResult};
pub use freshness_scheduler::{FreshnessJob, FreshnessScheduler, FreshnessSchedulerConfig};

//! # WageArc Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The monthly compensation timeline and inflation projection
//! - Per-employer summaries, coverage gaps and future salary targets
//! - Port interfaces (traits) for salary, preference and inflation storage
//! - The inflation sync use case
//!
//! ## Architecture Principles
//! - Only depends on `wagearc-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod baseline;
pub mod clock;
pub mod compensation;
pub mod gaps;
pub mod projection;
pub mod summary;
pub mod sync;
pub mod targets;
pub mod timeline;

// Infrastructure ports
pub mod inflation_ports;

pub use baseline::{strategy_for, BaselineStrategy};
pub use clock::{Clock, FixedClock, SystemClock};
pub use compensation::ports::{PreferenceRepository, SalaryEntryRepository};
pub use compensation::CompensationService;
pub use gaps::{salary_window, scan_source};
pub use inflation_ports::{InflationRateRepository, InflationSourceRepository};
pub use projection::{InflationProjector, Projection};
pub use summary::CompensationSummarizer;
pub use sync::{
    last_month_start, FetchError, InflationFetcher, InflationSyncService, SyncError, SyncResult,
};
pub use targets::future_salary_targets;
pub use timeline::{DerivedEndDates, RateIndex, Timeline, TimelineBuilder};

//! Inflation data refresh

pub mod error;
pub mod ports;
pub mod service;

pub use error::{FetchError, SyncError, SyncResult};
pub use ports::InflationFetcher;
pub use service::{last_month_start, InflationSyncService};

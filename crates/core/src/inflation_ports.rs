//! Inflation data ports.
//!
//! Storage of inflation sources and their monthly index values. Shared by the
//! compensation read path and the sync write path.
//!
//! # Example
//!
//! ```no_run
//! use wagearc_core::{InflationRateRepository, RateIndex};
//!
//! async fn load_index(rates: &impl InflationRateRepository, source_id: i64) -> RateIndex {
//!     let stored = rates.rates_for_source(source_id, None).await.unwrap_or_default();
//!     RateIndex::from_rates(&stored)
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use wagearc_domain::{InflationRate, InflationRecord, InflationSource, Result, SourceId, UpsertCounts};

/// Port for stored index values.
#[async_trait]
pub trait InflationRateRepository: Send + Sync {
    /// Rates of `source_id`, ordered by period, optionally limited to an
    /// inclusive `(start, end)` period range.
    async fn rates_for_source(
        &self,
        source_id: SourceId,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<InflationRate>>;

    /// Most recent stored period of `source_id`.
    async fn latest_period(&self, source_id: SourceId) -> Result<Option<NaiveDate>>;

    /// Create or overwrite one rate per record, keyed by `(source, period)`.
    ///
    /// The batch is all-or-nothing: on error no record may have been
    /// written. Every written row gets `fetched_at`.
    async fn upsert_batch(
        &self,
        source_id: SourceId,
        records: &[InflationRecord],
        fetched_at: DateTime<Utc>,
    ) -> Result<UpsertCounts>;
}

/// Port for the centrally managed source list.
#[async_trait]
pub trait InflationSourceRepository: Send + Sync {
    /// Sources flagged active, in any order.
    async fn active_sources(&self) -> Result<Vec<InflationSource>>;

    /// Active sources already published to users, ordered by label.
    async fn published_sources(&self) -> Result<Vec<InflationSource>>;

    /// Set `available_to_users` on `source_id`.
    async fn mark_published(&self, source_id: SourceId) -> Result<()>;
}

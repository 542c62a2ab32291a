//! Inflation sync service - fetches and stores index series

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};
use wagearc_domain::utils::money::round_index;
use wagearc_domain::utils::months::prev_month;
use wagearc_domain::{InflationRecord, InflationSource, RefreshResult, UpsertCounts};

use super::error::{SyncError, SyncResult};
use super::ports::InflationFetcher;
use crate::clock::{Clock, SystemClock};
use crate::inflation_ports::{InflationRateRepository, InflationSourceRepository};

/// First day of the month before `today`'s month.
///
/// A source whose latest period is earlier than this is considered stale.
#[must_use]
pub fn last_month_start(today: NaiveDate) -> NaiveDate {
    prev_month(today).unwrap_or(today)
}

/// Inflation sync service
pub struct InflationSyncService {
    fetcher: Arc<dyn InflationFetcher>,
    rates: Arc<dyn InflationRateRepository>,
    sources: Arc<dyn InflationSourceRepository>,
    clock: Arc<dyn Clock>,
}

impl InflationSyncService {
    /// Create a new sync service on the system clock
    pub fn new(
        fetcher: Arc<dyn InflationFetcher>,
        rates: Arc<dyn InflationRateRepository>,
        sources: Arc<dyn InflationSourceRepository>,
    ) -> Self {
        Self { fetcher, rates, sources, clock: Arc::new(SystemClock) }
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Fetch the series of `source` and store it.
    ///
    /// All records are upserted in one batch sharing a single `fetched_at`.
    /// The source is published to users when records arrived and it was not
    /// yet published.
    ///
    /// # Errors
    /// Returns [`SyncError::Fetch`] unchanged from the fetcher, or
    /// [`SyncError::Storage`] when the repositories fail.
    #[instrument(skip(self, source), fields(source = %source.code))]
    pub async fn refresh_source(&self, source: &InflationSource) -> SyncResult<RefreshResult> {
        let records: Vec<InflationRecord> = self
            .fetcher
            .fetch_series(&source.code)
            .await?
            .into_iter()
            .map(|record| InflationRecord { index_value: round_index(record.index_value), ..record })
            .collect();
        let fetched_at = self.clock.now();

        let counts = if records.is_empty() {
            UpsertCounts::default()
        } else {
            self.rates.upsert_batch(source.id, &records, fetched_at).await?
        };

        let publish = !records.is_empty() && !source.available_to_users;
        if publish {
            self.sources.mark_published(source.id).await?;
            info!(source_id = source.id, "Published inflation source to users");
        }

        debug!(
            records = records.len(),
            created = counts.created,
            updated = counts.updated,
            "Refreshed inflation source"
        );

        Ok(RefreshResult {
            source_id: source.id,
            source_code: source.code.clone(),
            created: counts.created,
            updated: counts.updated,
            record_count: records.len(),
            fetch_time: (!records.is_empty()).then_some(fetched_at),
            published_to_users: publish,
        })
    }

    /// Refresh every active source missing last month's data.
    ///
    /// A source is stale when it has no stored rates or its latest period is
    /// before [`last_month_start`]. Fetch failures are logged and skipped so
    /// one broken feed does not block the others.
    ///
    /// # Returns
    /// Number of sources that received at least one record.
    ///
    /// # Errors
    /// Returns [`SyncError::Storage`] when a repository fails.
    #[instrument(skip(self))]
    pub async fn ensure_recent_inflation_data(&self) -> SyncResult<usize> {
        let threshold = last_month_start(self.clock.today());
        let mut refreshed = 0;

        for source in self.sources.active_sources().await? {
            let latest = self.rates.latest_period(source.id).await?;
            if latest.is_some_and(|period| period >= threshold) {
                continue;
            }

            match self.refresh_source(&source).await {
                Ok(result) if result.record_count == 0 => {
                    info!(source = %source.code, "Automatic inflation refresh returned no rows");
                }
                Ok(_) => refreshed += 1,
                Err(SyncError::Fetch(err)) => {
                    warn!(source = %source.code, error = %err, "Automatic inflation refresh failed");
                }
                Err(err) => return Err(err),
            }
        }

        if refreshed == 0 {
            debug!(%threshold, "All inflation sources up to date");
        }
        Ok(refreshed)
    }
}

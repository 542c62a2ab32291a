//! Port interfaces for inflation sync

use async_trait::async_trait;
use wagearc_domain::InflationRecord;

use super::error::FetchError;

/// Client for an external consumer price index feed
#[async_trait]
pub trait InflationFetcher: Send + Sync {
    /// Fetch the full series published for `source_code`, ordered by period
    async fn fetch_series(&self, source_code: &str) -> Result<Vec<InflationRecord>, FetchError>;
}

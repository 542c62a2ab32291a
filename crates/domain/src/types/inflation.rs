//! Inflation source and index types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of an inflation source row
pub type SourceId = i64;

/// A centrally managed consumer price index feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationSource {
    pub id: SourceId,
    /// Feed code understood by the fetcher, e.g. `ECB_DE`
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    /// Set once the first successful refresh stored data
    pub available_to_users: bool,
}

/// Stored index value for one source and month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationRate {
    pub source_id: SourceId,
    /// First day of the month the index applies to
    pub period: NaiveDate,
    pub index_value: Decimal,
    #[serde(default)]
    pub metadata: RecordMetadata,
    pub fetched_at: DateTime<Utc>,
}

/// Index record as returned by a fetcher, before it is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationRecord {
    pub period: NaiveDate,
    pub index_value: Decimal,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl InflationRecord {
    pub fn new(period: NaiveDate, index_value: Decimal) -> Self {
        Self { period, index_value, metadata: RecordMetadata::default() }
    }
}

/// Free-form annotations the upstream feed attaches to an observation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
}

/// Row counts reported by a batch upsert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertCounts {
    pub created: usize,
    pub updated: usize,
}

/// Outcome of refreshing one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResult {
    pub source_id: SourceId,
    pub source_code: String,
    pub created: usize,
    pub updated: usize,
    /// Records returned by the fetcher
    pub record_count: usize,
    /// Shared `fetched_at` of the stored rows; absent when nothing arrived
    pub fetch_time: Option<DateTime<Utc>>,
    /// Whether this refresh made the source visible to users
    pub published_to_users: bool,
}

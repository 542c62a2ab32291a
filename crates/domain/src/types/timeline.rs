//! Month-by-month compensation timeline payload

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::inflation::InflationSource;
use super::preferences::BaselineMode;
use super::reasons::UnavailableReason;
use super::salary::{EmployerId, EntryId};

/// Compensation for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    /// First day of the month
    pub period: NaiveDate,
    /// `"Mon YYYY"`
    pub label: String,
    /// Regular pay active in the month, zero when none
    pub base_amount: Decimal,
    /// Base plus amortized bonuses
    pub total_amount: Decimal,
    /// Employer of the active regular entry
    pub employer_id: Option<EmployerId>,
}

/// Date range a bonus is spread over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusWindow {
    pub employer_id: EmployerId,
    /// Employer display name, when known
    pub employer: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Month in which the active employer changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerSwitch {
    pub label: String,
    pub employer: String,
}

/// Readiness and provenance of an inflation series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationMeta {
    pub ready: bool,
    /// Label of the selected source
    pub source: Option<String>,
    pub reason: Option<UnavailableReason>,
    pub base_label: Option<String>,
    pub base_salary: Option<Decimal>,
    pub mode: BaselineMode,
    pub manual_entry_id: Option<EntryId>,
}

impl InflationMeta {
    /// Metadata for a series that could not be computed.
    pub fn unavailable(
        reason: UnavailableReason,
        mode: BaselineMode,
        source: Option<&InflationSource>,
        manual_entry_id: Option<EntryId>,
    ) -> Self {
        Self {
            ready: false,
            source: source.map(|s| s.label.clone()),
            reason: Some(reason),
            base_label: None,
            base_salary: None,
            mode,
            manual_entry_id,
        }
    }

    /// User-facing message for the current reason, if any.
    pub fn message(&self) -> Option<&'static str> {
        self.reason.map(|reason| reason.message())
    }
}

/// Everything a chart needs to render a salary history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePayload {
    pub labels: Vec<String>,
    pub base_series: Vec<Decimal>,
    pub total_series: Vec<Decimal>,
    pub bonus_windows: Vec<BonusWindow>,
    /// One value per label; `None` where no comparison is possible
    pub inflation_series: Vec<Option<Decimal>>,
    pub inflation_meta: InflationMeta,
    pub employer_switches: Vec<EmployerSwitch>,
    pub points: Vec<TimelinePoint>,
}

impl TimelinePayload {
    /// Payload for a user without any salary entries.
    pub fn empty(
        mode: BaselineMode,
        source: Option<&InflationSource>,
        manual_entry_id: Option<EntryId>,
    ) -> Self {
        Self {
            labels: Vec::new(),
            base_series: Vec::new(),
            total_series: Vec::new(),
            bonus_windows: Vec::new(),
            inflation_series: Vec::new(),
            inflation_meta: InflationMeta::unavailable(
                UnavailableReason::MissingTimeline,
                mode,
                source,
                manual_entry_id,
            ),
            employer_switches: Vec::new(),
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

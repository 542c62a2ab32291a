//! Per-employer summaries and inflation coverage reports

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::reasons::{DeltaState, UnavailableReason};
use super::salary::EmployerId;

/// Actual versus inflation-adjusted pay for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyComparison {
    pub period: NaiveDate,
    pub label: String,
    pub actual: Decimal,
    pub inflation: Option<Decimal>,
    pub delta: Option<Decimal>,
    /// Running sum of `delta` since the employer's first month
    pub cumulative_delta: Option<Decimal>,
}

/// Compensation totals for one employer up to the last complete month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerCompSummary {
    pub employer_id: EmployerId,
    pub employer_name: String,
    pub actual_total: Decimal,
    pub inflation_total: Option<Decimal>,
    pub inflation_ready: bool,
    pub inflation_reason: Option<UnavailableReason>,
    pub inflation_message: Option<String>,
    pub delta_amount: Option<Decimal>,
    pub delta_state: Option<DeltaState>,
    #[serde(default)]
    pub monthly_breakdown: Vec<MonthlyComparison>,
}

/// Inclusive run of months without an index value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationGap {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Coverage of one source over the user's salary window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationGapReport {
    /// Source code
    pub source: String,
    pub label: String,
    pub missing_ranges: Vec<InflationGap>,
    pub missing_months: i64,
    pub expected_months: i64,
    pub is_complete: bool,
}

/// Gap reports for every visible source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReport {
    pub has_salary_data: bool,
    pub start_period: Option<NaiveDate>,
    pub end_period: Option<NaiveDate>,
    pub sources: Vec<InflationGapReport>,
}

impl GapReport {
    /// Report for a user without salary entries.
    pub fn no_salary_data() -> Self {
        Self::default()
    }
}

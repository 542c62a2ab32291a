//! Inflation coverage gaps
//!
//! Reports, per source, which months of the user's salary window have no
//! stored index value so the user knows the comparison will be incomplete.

use chrono::NaiveDate;
use wagearc_domain::utils::months::{iter_months, month_span_count, month_start, prev_month};
use wagearc_domain::{InflationGap, InflationGapReport, InflationSource, SalaryEntry};

use crate::timeline::RateIndex;

/// Month window a user's salary data covers
///
/// Runs from the earliest effective month to the later of today and the
/// latest coverage end (open regular entries count as ending today, bonuses
/// at their resolved end).
pub fn salary_window(entries: &[SalaryEntry], today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let start = entries.iter().map(|entry| entry.effective_date).min()?;
    let latest = entries.iter().map(|entry| entry.coverage_end(today)).max()?;
    Some((month_start(start), month_start(latest.max(today))))
}

/// Scan `rates` for missing months within `[start, end]`.
///
/// A stored record counts as present even when its value is zero.
pub fn scan_source(
    source: &InflationSource,
    rates: &RateIndex,
    start: NaiveDate,
    end: NaiveDate,
) -> InflationGapReport {
    let expected_months = month_span_count(start, end).max(0);
    let mut missing_ranges = Vec::new();
    let mut gap_start: Option<NaiveDate> = None;
    let mut any_present = false;

    for period in iter_months(start, end) {
        if rates.has_record(period) {
            any_present = true;
            if let Some(open) = gap_start.take() {
                let close = prev_month(period).unwrap_or(open);
                missing_ranges.push(InflationGap { start: open, end: close });
            }
        } else if gap_start.is_none() {
            gap_start = Some(period);
        }
    }
    if let Some(open) = gap_start {
        missing_ranges.push(InflationGap { start: open, end: month_start(end) });
    }

    let missing_months = missing_ranges.iter().map(|gap| month_span_count(gap.start, gap.end)).sum();

    InflationGapReport {
        source: source.code.clone(),
        label: source.label.clone(),
        missing_ranges,
        missing_months,
        expected_months,
        is_complete: expected_months > 0 && missing_months == 0 && any_present,
    }
}

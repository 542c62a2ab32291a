//! Future salary targets
//!
//! For a few meaningful reference points in the user's history, computes the
//! salary that would restore the purchasing power the user had at that
//! point, measured at the latest available price level.

use rust_decimal::Decimal;
use wagearc_domain::utils::money::round_currency;
use wagearc_domain::utils::months::month_start;
use wagearc_domain::{
    FutureSalaryTarget, FutureTargets, InflationSource, SalaryEntry, TargetKind, UnavailableReason,
};

use crate::timeline::RateIndex;

/// Compute targets from `entries` against the full index of `source`.
///
/// # Arguments
/// * `entries` - every salary entry of the user
/// * `source` - selected inflation source; `None` yields no targets
/// * `manual_entry` - the user's manual baseline, used only when regular
/// * `rates` - all stored index values of `source`
pub fn future_salary_targets(
    entries: &[SalaryEntry],
    source: Option<&InflationSource>,
    manual_entry: Option<&SalaryEntry>,
    rates: &RateIndex,
) -> FutureTargets {
    if source.is_none() {
        return FutureTargets::unavailable(UnavailableReason::NoSourceSelected, None);
    }
    let Some((period, _)) = rates.latest() else {
        return FutureTargets::unavailable(UnavailableReason::NoInflationData, None);
    };
    let Some(latest_index) = rates.get(period) else {
        return FutureTargets::unavailable(UnavailableReason::MissingSeriesData, Some(period));
    };

    let mut regular: Vec<&SalaryEntry> = entries.iter().filter(|entry| entry.is_regular()).collect();
    regular.sort_by_key(|entry| entry.chronological_key());
    let Some(current) = regular.last().copied() else {
        return FutureTargets::unavailable(UnavailableReason::NoRegularSalary, Some(period));
    };

    let calculator = TargetCalculator { rates, latest_index, current };
    let mut targets = Vec::new();
    if let Some(reference) = last_raise(&regular) {
        targets.push(calculator.target(TargetKind::LastRaise, reference));
    }
    if let Some(reference) = regular.iter().copied().find(|e| e.employer_id == current.employer_id) {
        targets.push(calculator.target(TargetKind::EmployerStart, reference));
    }
    if let Some(reference) = manual_entry.filter(|entry| entry.is_regular()) {
        targets.push(calculator.target(TargetKind::ManualBaseline, reference));
    }

    FutureTargets { targets, message: None, period: Some(period) }
}

/// Latest regular entry whose amount differs from its predecessor; the first
/// entry when the amount never changed.
fn last_raise<'a>(regular: &[&'a SalaryEntry]) -> Option<&'a SalaryEntry> {
    let mut reference = regular.first().copied()?;
    for pair in regular.windows(2) {
        if pair[1].amount != pair[0].amount {
            reference = pair[1];
        }
    }
    Some(reference)
}

struct TargetCalculator<'a> {
    rates: &'a RateIndex,
    latest_index: Decimal,
    current: &'a SalaryEntry,
}

impl TargetCalculator<'_> {
    fn target(&self, key: TargetKind, reference: &SalaryEntry) -> FutureSalaryTarget {
        let reference_index = self.rates.get(month_start(reference.effective_date));
        let target_salary = reference_index.and_then(|index| {
            reference.amount.checked_mul(self.latest_index)?.checked_div(index).map(round_currency)
        });
        FutureSalaryTarget {
            key,
            label: key.label().to_string(),
            reference_entry_id: reference.id,
            reference_date: reference.effective_date,
            reference_amount: reference.amount,
            reference_index,
            target_salary,
            delta_amount: target_salary.map(|target| round_currency(target - self.current.amount)),
            reason: target_salary.is_none().then_some(UnavailableReason::MissingBaselineIndex),
        }
    }
}

//! Per-employer compensation summary
//!
//! Compares what a user actually earned at each employer, up to the last
//! fully elapsed month, with what their starting salary there would have
//! needed to be to keep pace with inflation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;
use wagearc_domain::utils::money::{round_currency, zero_currency};
use wagearc_domain::utils::months::{iter_months, last_complete_month, month_label, month_start};
use wagearc_domain::{
    DeltaState, Employer, EmployerCompSummary, InflationSource, MonthlyComparison, SalaryEntry,
    UnavailableReason,
};

use crate::timeline::builder::{BonusSpan, CompensationWalk, RegularCursor};
use crate::timeline::{DerivedEndDates, RateIndex};

/// Actual pay of one employer up to the cutoff
#[derive(Debug, Clone, PartialEq, Eq)]
struct ActualPay {
    total: Decimal,
    /// Last month with a positive base or bonus
    comparison_end: Option<NaiveDate>,
    months: Vec<(NaiveDate, Decimal)>,
}

impl ActualPay {
    fn empty() -> Self {
        Self { total: zero_currency(), comparison_end: None, months: Vec::new() }
    }
}

/// Inflation anchor of one employer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Anchor {
    amount: Decimal,
    base_period: NaiveDate,
    base_index: Decimal,
}

/// Inflation side of a summary
#[derive(Debug, Clone, PartialEq, Eq)]
enum InflationOutcome {
    /// Window with no months to compare
    Empty,
    Ready { total: Decimal, anchor: Anchor, end: NaiveDate },
    Unavailable(UnavailableReason),
}

/// Builds [`EmployerCompSummary`] values for one user
#[derive(Debug)]
pub struct CompensationSummarizer<'a> {
    entries: &'a [SalaryEntry],
    derived: DerivedEndDates,
    source: Option<&'a InflationSource>,
    rates: &'a RateIndex,
    cutoff: Option<NaiveDate>,
}

impl<'a> CompensationSummarizer<'a> {
    /// # Arguments
    /// * `entries` - every salary entry of the user; regular entries of all
    ///   employers feed the derived end dates
    /// * `source` - selected inflation source, if any
    /// * `rates` - all stored index values of `source`
    /// * `today` - the cutoff is the month before `today`'s month
    pub fn new(
        entries: &'a [SalaryEntry],
        source: Option<&'a InflationSource>,
        rates: &'a RateIndex,
        today: NaiveDate,
    ) -> Self {
        Self {
            entries,
            derived: DerivedEndDates::from_entries(entries),
            source,
            rates,
            cutoff: last_complete_month(today),
        }
    }

    /// Last fully elapsed month, if any.
    pub fn cutoff(&self) -> Option<NaiveDate> {
        self.cutoff
    }

    /// One summary per employer, in the order given.
    pub fn summarize(&self, employers: &[Employer]) -> Vec<EmployerCompSummary> {
        employers.iter().map(|employer| self.summarize_employer(employer)).collect()
    }

    /// Summary for a single employer.
    pub fn summarize_employer(&self, employer: &Employer) -> EmployerCompSummary {
        let entries: Vec<&SalaryEntry> =
            self.entries.iter().filter(|entry| entry.employer_id == employer.id).collect();
        let actual = self.actual_pay(&entries);
        let outcome = match self.source {
            None => InflationOutcome::Unavailable(UnavailableReason::NoSourceSelected),
            Some(_) => self.inflation(&entries, actual.comparison_end),
        };

        let (inflation_total, reason) = match &outcome {
            InflationOutcome::Empty => (Some(zero_currency()), None),
            InflationOutcome::Ready { total, .. } => (Some(*total), None),
            InflationOutcome::Unavailable(reason) => (None, Some(*reason)),
        };
        let delta_amount = inflation_total.map(|inflation| round_currency(actual.total - inflation));

        debug!(
            employer_id = employer.id,
            actual_total = %actual.total,
            inflation_ready = reason.is_none(),
            "Summarized employer compensation"
        );

        EmployerCompSummary {
            employer_id: employer.id,
            employer_name: employer.name.clone(),
            actual_total: actual.total,
            inflation_total,
            inflation_ready: reason.is_none(),
            inflation_reason: reason,
            inflation_message: reason.map(|reason| reason.message().to_string()),
            delta_amount,
            delta_state: delta_amount.map(DeltaState::from_delta),
            monthly_breakdown: self.breakdown(&actual, &outcome),
        }
    }

    fn actual_pay(&self, entries: &[&SalaryEntry]) -> ActualPay {
        let Some(cutoff) = self.cutoff else {
            return ActualPay::empty();
        };
        let scoped: Vec<&SalaryEntry> =
            entries.iter().copied().filter(|entry| entry.effective_date <= cutoff).collect();
        let Some(first) = scoped.iter().map(|entry| entry.effective_date).min() else {
            return ActualPay::empty();
        };
        let start = month_start(first);

        let mut bonuses: Vec<&SalaryEntry> = scoped.iter().copied().filter(|e| e.is_bonus()).collect();
        bonuses.sort_by_key(|entry| entry.chronological_key());
        let spans = bonuses
            .iter()
            .map(|bonus| BonusSpan::new(bonus, bonus.bonus_end().min(cutoff)))
            .collect();

        let walk = CompensationWalk::new(
            start,
            cutoff,
            RegularCursor::new(scoped.iter().copied()),
            spans,
            &self.derived,
        );

        let mut total = Decimal::ZERO;
        let mut comparison_end = None;
        let mut months = Vec::new();
        for month in walk {
            if month.base > Decimal::ZERO || month.bonus > Decimal::ZERO {
                comparison_end = Some(month.period);
            }
            let amount = month.base + month.bonus;
            total += amount;
            months.push((month.period, amount));
        }

        ActualPay { total: round_currency(total), comparison_end, months }
    }

    fn inflation(&self, entries: &[&SalaryEntry], comparison_end: Option<NaiveDate>) -> InflationOutcome {
        let Some(first) = entries
            .iter()
            .copied()
            .filter(|entry| entry.is_regular())
            .min_by_key(|entry| entry.chronological_key())
        else {
            return InflationOutcome::Unavailable(UnavailableReason::NoRegularSalary);
        };
        let Some(end) = comparison_end else {
            return InflationOutcome::Empty;
        };
        let base_period = month_start(first.effective_date);
        if end < base_period {
            return InflationOutcome::Empty;
        }
        if self.rates.is_empty() {
            return InflationOutcome::Unavailable(UnavailableReason::NoInflationData);
        }
        let Some(base_index) = self.rates.get(base_period) else {
            return InflationOutcome::Unavailable(UnavailableReason::MissingBaselineIndex);
        };

        let anchor = Anchor { amount: first.amount, base_period, base_index };
        let mut total = Decimal::ZERO;
        for period in iter_months(base_period, end) {
            match self.adjusted(&anchor, period) {
                Some(value) => total += value,
                None => return InflationOutcome::Unavailable(UnavailableReason::MissingSeriesData),
            }
        }
        InflationOutcome::Ready { total: round_currency(total), anchor, end }
    }

    /// Anchor salary at `period`'s price level, unrounded.
    fn adjusted(&self, anchor: &Anchor, period: NaiveDate) -> Option<Decimal> {
        let index = self.rates.get(period)?;
        anchor.amount.checked_mul(index)?.checked_div(anchor.base_index)
    }

    fn breakdown(&self, actual: &ActualPay, outcome: &InflationOutcome) -> Vec<MonthlyComparison> {
        let mut cumulative = Decimal::ZERO;
        actual
            .months
            .iter()
            .map(|(period, amount)| {
                let inflation = match outcome {
                    InflationOutcome::Ready { anchor, end, .. }
                        if anchor.base_period <= *period && period <= end =>
                    {
                        self.adjusted(anchor, *period)
                    }
                    _ => None,
                };
                let delta = inflation.map(|inflation| *amount - inflation);
                let cumulative_delta = delta.map(|delta| {
                    cumulative += delta;
                    round_currency(cumulative)
                });
                MonthlyComparison {
                    period: *period,
                    label: month_label(*period),
                    actual: round_currency(*amount),
                    inflation: inflation.map(round_currency),
                    delta: delta.map(round_currency),
                    cumulative_delta,
                }
            })
            .collect()
    }
}

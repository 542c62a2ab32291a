//! Timeline builder - expands salary entries into one point per month
//!
//! The month walk here is shared by the chart timeline and the per-employer
//! summary; the two differ only in their window and in how bonus ends are
//! resolved.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;
use wagearc_domain::constants::UNKNOWN_EMPLOYER_SWITCH_LABEL;
use wagearc_domain::utils::money::round_currency;
use wagearc_domain::utils::months::{iter_months, month_label, month_span_count, month_start, MonthIter};
use wagearc_domain::{BonusWindow, EmployerId, EmployerSwitch, SalaryEntry, TimelinePoint};

use super::derived_ends::DerivedEndDates;

/// A bonus spread evenly over the months it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BonusSpan {
    start: NaiveDate,
    end: NaiveDate,
    monthly: Decimal,
}

impl BonusSpan {
    /// Spread `entry.amount` over `[month(effective), month(end)]`.
    pub(crate) fn new(entry: &SalaryEntry, end: NaiveDate) -> Self {
        let start = month_start(entry.effective_date);
        let end = month_start(end);
        let months = Decimal::from(month_span_count(start, end).max(1));
        let monthly = entry.amount.checked_div(months).unwrap_or(entry.amount);
        Self { start, end, monthly }
    }

    fn covers(&self, period: NaiveDate) -> bool {
        self.start <= period && period <= self.end
    }
}

/// Sum of every bonus share falling into `period`.
pub(crate) fn bonus_allocation(period: NaiveDate, spans: &[BonusSpan]) -> Decimal {
    spans.iter().filter(|span| span.covers(period)).map(|span| span.monthly).sum()
}

/// Two-pointer cursor over regular entries sorted chronologically
#[derive(Debug)]
pub(crate) struct RegularCursor<'a> {
    entries: Vec<&'a SalaryEntry>,
    next: usize,
    active: Option<&'a SalaryEntry>,
}

impl<'a> RegularCursor<'a> {
    pub(crate) fn new(entries: impl IntoIterator<Item = &'a SalaryEntry>) -> Self {
        let mut entries: Vec<&SalaryEntry> =
            entries.into_iter().filter(|entry| entry.is_regular()).collect();
        entries.sort_by_key(|entry| entry.chronological_key());
        Self { entries, next: 0, active: None }
    }

    /// Move to `period` and return the regular entry active in it.
    ///
    /// Periods must be visited in ascending order.
    pub(crate) fn advance(
        &mut self,
        period: NaiveDate,
        derived: &DerivedEndDates,
    ) -> Option<&'a SalaryEntry> {
        while let Some(entry) = self.entries.get(self.next) {
            if entry.effective_date > period {
                break;
            }
            self.active = Some(entry);
            self.next += 1;
        }
        if let Some(active) = self.active {
            let ended = derived.resolve(active).is_some_and(|end| month_start(end) < period);
            if ended {
                self.active = None;
            }
        }
        self.active
    }
}

/// Pay attributed to one month by the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonthAllocation {
    pub(crate) period: NaiveDate,
    pub(crate) base: Decimal,
    pub(crate) bonus: Decimal,
    pub(crate) employer_id: Option<EmployerId>,
}

/// Iterator yielding a [`MonthAllocation`] per month of a window
pub(crate) struct CompensationWalk<'a> {
    months: MonthIter,
    cursor: RegularCursor<'a>,
    bonuses: Vec<BonusSpan>,
    derived: &'a DerivedEndDates,
}

impl<'a> CompensationWalk<'a> {
    pub(crate) fn new(
        start: NaiveDate,
        end: NaiveDate,
        cursor: RegularCursor<'a>,
        bonuses: Vec<BonusSpan>,
        derived: &'a DerivedEndDates,
    ) -> Self {
        Self { months: iter_months(start, end), cursor, bonuses, derived }
    }
}

impl Iterator for CompensationWalk<'_> {
    type Item = MonthAllocation;

    fn next(&mut self) -> Option<Self::Item> {
        let period = self.months.next()?;
        let active = self.cursor.advance(period, self.derived);
        Some(MonthAllocation {
            period,
            base: active.map_or(Decimal::ZERO, |entry| entry.amount),
            bonus: bonus_allocation(period, &self.bonuses),
            employer_id: active.map(|entry| entry.employer_id),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.months.size_hint()
    }
}

/// Output of [`TimelineBuilder::build`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub points: Vec<TimelinePoint>,
    /// First period of the window
    pub start: NaiveDate,
    /// Last period of the window
    pub end: NaiveDate,
    pub bonus_windows: Vec<BonusWindow>,
    pub employer_switches: Vec<EmployerSwitch>,
}

/// Builds the month-by-month compensation timeline of one user
#[derive(Debug, Clone, Copy)]
pub struct TimelineBuilder {
    today: NaiveDate,
}

impl TimelineBuilder {
    /// `today` closes the window for entries without an end date.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Build the timeline for `entries`; `None` when there are none.
    ///
    /// # Algorithm
    /// 1. Window: `month(min effective)` through the latest coverage end;
    ///    open regular entries run to today, bonuses to their resolved end
    /// 2. Regular entries are walked with a single cursor; an entry stays
    ///    active until its resolved end month has passed
    /// 3. Each bonus adds `amount / months` to every month of its span;
    ///    bonuses without an end run to the day before their anniversary
    /// 4. A switch is recorded whenever the active employer differs from the
    ///    previous month's
    pub fn build(&self, entries: &[SalaryEntry]) -> Option<Timeline> {
        let start = month_start(entries.iter().map(|entry| entry.effective_date).min()?);
        let latest = entries.iter().map(|entry| entry.coverage_end(self.today)).max()?;
        let end = month_start(latest);

        let derived = DerivedEndDates::from_entries(entries);
        let mut bonuses: Vec<&SalaryEntry> = entries.iter().filter(|entry| entry.is_bonus()).collect();
        bonuses.sort_by_key(|entry| entry.chronological_key());

        let spans = bonuses.iter().map(|bonus| BonusSpan::new(bonus, bonus.bonus_end())).collect();
        let names = employer_names(entries);

        let walk = CompensationWalk::new(start, end, RegularCursor::new(entries), spans, &derived);
        let mut points = Vec::with_capacity(walk.size_hint().0);
        let mut employer_switches = Vec::new();
        let mut previous_employer: Option<EmployerId> = None;

        for month in walk {
            let label = month_label(month.period);
            if let Some(employer_id) = month.employer_id {
                if previous_employer != Some(employer_id) {
                    employer_switches.push(EmployerSwitch {
                        label: label.clone(),
                        employer: names
                            .get(&employer_id)
                            .cloned()
                            .unwrap_or_else(|| UNKNOWN_EMPLOYER_SWITCH_LABEL.to_string()),
                    });
                }
            }
            previous_employer = month.employer_id;
            points.push(TimelinePoint {
                period: month.period,
                label,
                base_amount: month.base,
                total_amount: round_currency(month.base + month.bonus),
                employer_id: month.employer_id,
            });
        }

        let bonus_windows = bonuses
            .iter()
            .map(|bonus| BonusWindow {
                employer_id: bonus.employer_id,
                employer: bonus.employer_name.clone(),
                start: bonus.effective_date,
                end: bonus.bonus_end(),
            })
            .collect();

        debug!(
            months = points.len(),
            switches = employer_switches.len(),
            derived_ends = derived.len(),
            "Built salary timeline"
        );

        Some(Timeline { points, start, end, bonus_windows, employer_switches })
    }
}

fn employer_names(entries: &[SalaryEntry]) -> HashMap<EmployerId, String> {
    entries
        .iter()
        .filter_map(|entry| entry.employer_name.clone().map(|name| (entry.employer_id, name)))
        .collect()
}

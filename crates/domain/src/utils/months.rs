//! Calendar month arithmetic
//!
//! A *period* is a calendar month represented by its first day. Every helper
//! here either produces a period or walks between periods; none of them look
//! at the day component except to normalise it away.

use chrono::{Datelike, Months, NaiveDate};

use crate::constants::MONTH_LABEL_FORMAT;

/// Normalise a date to the first day of its month.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wagearc_domain::utils::months::month_start;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
/// assert_eq!(month_start(date), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// ```
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month after `date`'s month, if representable.
#[must_use]
pub fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    month_start(date).checked_add_months(Months::new(1))
}

/// First day of the month before `date`'s month, if representable.
#[must_use]
pub fn prev_month(date: NaiveDate) -> Option<NaiveDate> {
    month_start(date).checked_sub_months(Months::new(1))
}

/// Number of calendar months in `[month(start), month(end)]`, inclusive.
///
/// Returns zero or a negative count when `end` lies in an earlier month than
/// `start`; callers that divide by the span clamp it with `max(1)`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wagearc_domain::utils::months::month_span_count;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
/// assert_eq!(month_span_count(start, end), 3);
/// ```
#[must_use]
pub fn month_span_count(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    years * 12 + months + 1
}

/// The last calendar month that has fully elapsed relative to `reference`.
///
/// This is the month before `reference`'s month; the current month is never
/// complete. Returns `None` when there is no earlier representable month.
#[must_use]
pub fn last_complete_month(reference: NaiveDate) -> Option<NaiveDate> {
    prev_month(reference)
}

/// Human label for a period, e.g. `Jan 2024`.
#[must_use]
pub fn month_label(period: NaiveDate) -> String {
    period.format(MONTH_LABEL_FORMAT).to_string()
}

/// Iterate every period from `month(start)` through `month(end)` inclusive.
///
/// Yields nothing when `end` lies in an earlier month than `start`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wagearc_domain::utils::months::iter_months;
///
/// let start = NaiveDate::from_ymd_opt(2023, 11, 20).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let periods: Vec<_> = iter_months(start, end).collect();
/// assert_eq!(periods.len(), 3);
/// assert_eq!(periods[0], NaiveDate::from_ymd_opt(2023, 11, 1).unwrap());
/// ```
#[must_use]
pub fn iter_months(start: NaiveDate, end: NaiveDate) -> MonthIter {
    MonthIter { current: Some(month_start(start)), end: month_start(end) }
}

/// Iterator over consecutive periods; see [`iter_months`].
#[derive(Debug, Clone)]
pub struct MonthIter {
    current: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for MonthIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.filter(|period| *period <= self.end)?;
        self.current = next_month(current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .current
            .map_or(0, |current| month_span_count(current, self.end).max(0));
        let remaining = usize::try_from(remaining).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

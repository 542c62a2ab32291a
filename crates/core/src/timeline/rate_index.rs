//! Month-keyed lookup over stored index values

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wagearc_domain::utils::months::month_start;
use wagearc_domain::InflationRate;

/// Index values of one source keyed by period
///
/// A stored value of zero is kept (the month counts as *present* for gap
/// reporting) but [`RateIndex::get`] treats it as missing, since it cannot be
/// used as a divisor or a meaningful price level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateIndex {
    values: BTreeMap<NaiveDate, Decimal>,
}

impl RateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored rates; periods are normalised to month starts.
    pub fn from_rates<'a>(rates: impl IntoIterator<Item = &'a InflationRate>) -> Self {
        Self::from_pairs(rates.into_iter().map(|rate| (rate.period, rate.index_value)))
    }

    /// Build from `(period, index)` pairs. Later duplicates win.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (NaiveDate, Decimal)>) -> Self {
        let values = pairs.into_iter().map(|(period, value)| (month_start(period), value)).collect();
        Self { values }
    }

    /// Copy restricted to periods within `[month(start), month(end)]`.
    #[must_use]
    pub fn bounded(&self, start: NaiveDate, end: NaiveDate) -> Self {
        let (start, end) = (month_start(start), month_start(end));
        if start > end {
            return Self::default();
        }
        let values = self.values.range(start..=end).map(|(period, value)| (*period, *value)).collect();
        Self { values }
    }

    /// Usable index value for `period`; zero counts as missing.
    pub fn get(&self, period: NaiveDate) -> Option<Decimal> {
        self.values.get(&month_start(period)).copied().filter(|value| !value.is_zero())
    }

    /// Whether any record exists for `period`, regardless of its value.
    pub fn has_record(&self, period: NaiveDate) -> bool {
        self.values.contains_key(&month_start(period))
    }

    /// Most recent period and its raw value.
    pub fn latest(&self) -> Option<(NaiveDate, Decimal)> {
        self.values.iter().next_back().map(|(period, value)| (*period, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

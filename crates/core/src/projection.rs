//! Inflation projector
//!
//! Turns a timeline plus a baseline into the series of what each month's
//! reference salary would be worth at that month's price level.

use rust_decimal::Decimal;
use tracing::debug;
use wagearc_domain::utils::money::round_currency;
use wagearc_domain::{
    BaselineMode, InflationMeta, InflationSource, SalaryEntry, TimelinePoint, UnavailableReason,
};

use crate::baseline::{strategy_for, BaselineSetup};
use crate::timeline::RateIndex;

/// Inflation-adjusted series aligned with the timeline, plus its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Empty when no baseline could be established
    pub series: Vec<Option<Decimal>>,
    pub meta: InflationMeta,
}

/// Computes inflation-adjusted values for a timeline
#[derive(Debug, Clone, Copy)]
pub struct InflationProjector<'a> {
    rates: &'a RateIndex,
}

impl<'a> InflationProjector<'a> {
    /// `rates` should already be limited to the timeline window.
    pub fn new(rates: &'a RateIndex) -> Self {
        Self { rates }
    }

    /// Project `timeline` with the baseline policy `mode`.
    ///
    /// Checks run in order: an empty timeline yields `missing-timeline`, no
    /// source yields `no-source-selected`, then the baseline strategy may
    /// fail with its own reason. When every projected value is missing the
    /// series is still returned, with `missing-series-data`.
    pub fn project(
        &self,
        timeline: &[TimelinePoint],
        mode: BaselineMode,
        source: Option<&InflationSource>,
        manual_entry: Option<&SalaryEntry>,
    ) -> Projection {
        let manual_entry_id = manual_entry.map(|entry| entry.id);
        let unavailable = |reason: UnavailableReason| Projection {
            series: Vec::new(),
            meta: InflationMeta::unavailable(reason, mode, source, manual_entry_id),
        };

        if timeline.is_empty() {
            return unavailable(UnavailableReason::MissingTimeline);
        }
        if source.is_none() {
            return unavailable(UnavailableReason::NoSourceSelected);
        }

        let setup = match strategy_for(mode).setup(timeline, self.rates, manual_entry) {
            Ok(setup) => setup,
            Err(reason) => {
                debug!(mode = %mode, reason = %reason, "No inflation baseline");
                return unavailable(reason);
            }
        };

        let series = self.series(timeline, &setup);
        let computed = series.iter().filter(|value| value.is_some()).count();
        debug!(mode = %mode, months = series.len(), computed, "Projected inflation series");

        if computed == 0 {
            return Projection {
                series,
                meta: InflationMeta::unavailable(
                    UnavailableReason::MissingSeriesData,
                    mode,
                    source,
                    manual_entry_id,
                ),
            };
        }

        Projection {
            series,
            meta: InflationMeta {
                ready: true,
                source: source.map(|s| s.label.clone()),
                reason: None,
                base_label: setup.base_label,
                base_salary: setup.base_salary,
                mode,
                manual_entry_id,
            },
        }
    }

    fn series(&self, timeline: &[TimelinePoint], setup: &BaselineSetup) -> Vec<Option<Decimal>> {
        timeline.iter().map(|point| self.value_for(point, setup)).collect()
    }

    fn value_for(&self, point: &TimelinePoint, setup: &BaselineSetup) -> Option<Decimal> {
        let reference = setup.selector.select(point)?;
        if setup.skip_prehistory && point.period < reference.point.period {
            return None;
        }
        let period_index = self.rates.get(point.period)?;
        let scaled = reference.point.base_amount.checked_mul(period_index)?;
        scaled.checked_div(reference.index).map(round_currency)
    }
}

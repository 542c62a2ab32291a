//! Last-increase baseline: each month is compared with the latest pay change

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use wagearc_domain::{BaselineMode, SalaryEntry, TimelinePoint, UnavailableReason};

use super::{BaselineSelector, BaselineSetup, BaselineStrategy, Reference};
use crate::timeline::RateIndex;

/// Reference moves to every month whose base differs from the last nonzero
/// base
///
/// Months with zero base neither start nor end a reference, so pay resuming
/// at the same amount after a gap keeps the earlier reference.
#[derive(Debug, Default, Clone, Copy)]
pub struct LastIncreaseBaseline;

impl BaselineStrategy for LastIncreaseBaseline {
    fn mode(&self) -> BaselineMode {
        BaselineMode::LastIncrease
    }

    fn setup(
        &self,
        timeline: &[TimelinePoint],
        rates: &RateIndex,
        _manual_entry: Option<&SalaryEntry>,
    ) -> Result<BaselineSetup, UnavailableReason> {
        let mut references = BTreeMap::new();
        let mut previous: Option<Decimal> = None;
        let mut current: Option<Reference> = None;
        let mut any_raise = false;

        for point in timeline {
            let is_change = point.base_amount > Decimal::ZERO && previous != Some(point.base_amount);
            if is_change {
                let index = rates.get(point.period).ok_or(UnavailableReason::MissingBaselineIndex)?;
                current = Some(Reference { point: point.clone(), index });
                previous = Some(point.base_amount);
                any_raise = true;
            }
            if let Some(reference) = &current {
                references.insert(point.period, reference.clone());
            }
        }

        if !any_raise {
            return Err(UnavailableReason::NoRegularSalary);
        }

        Ok(BaselineSetup {
            selector: BaselineSelector::ByPeriod(references),
            base_label: None,
            base_salary: None,
            skip_prehistory: true,
        })
    }
}

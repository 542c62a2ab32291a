//! Whole-history baseline: every month is compared with the first salary

use rust_decimal::Decimal;
use wagearc_domain::{BaselineMode, SalaryEntry, TimelinePoint, UnavailableReason};

use super::{BaselineSetup, BaselineStrategy, Reference};
use crate::timeline::RateIndex;

/// First month with a regular salary is the single reference
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalBaseline;

impl BaselineStrategy for GlobalBaseline {
    fn mode(&self) -> BaselineMode {
        BaselineMode::Global
    }

    fn setup(
        &self,
        timeline: &[TimelinePoint],
        rates: &RateIndex,
        _manual_entry: Option<&SalaryEntry>,
    ) -> Result<BaselineSetup, UnavailableReason> {
        let first = timeline
            .iter()
            .find(|point| point.base_amount > Decimal::ZERO)
            .ok_or(UnavailableReason::NoRegularSalary)?;
        let index = rates.get(first.period).ok_or(UnavailableReason::MissingBaselineIndex)?;
        Ok(BaselineSetup::fixed(Reference { point: first.clone(), index }))
    }
}

//! Per-employer baseline: each employer is measured from its own first salary

use std::collections::HashMap;

use rust_decimal::Decimal;
use wagearc_domain::{BaselineMode, EmployerId, SalaryEntry, TimelinePoint, UnavailableReason};

use super::{BaselineSelector, BaselineSetup, BaselineStrategy, Reference};
use crate::timeline::RateIndex;

/// First positive month per employer is that employer's reference
///
/// All-or-nothing: if any employer's first month has no index, no baseline is
/// produced. Months without an employer get no value.
#[derive(Debug, Default, Clone, Copy)]
pub struct PerEmployerBaseline;

impl BaselineStrategy for PerEmployerBaseline {
    fn mode(&self) -> BaselineMode {
        BaselineMode::PerEmployer
    }

    fn setup(
        &self,
        timeline: &[TimelinePoint],
        rates: &RateIndex,
        _manual_entry: Option<&SalaryEntry>,
    ) -> Result<BaselineSetup, UnavailableReason> {
        let mut firsts: HashMap<EmployerId, &TimelinePoint> = HashMap::new();
        for point in timeline {
            let positive = point.base_amount > Decimal::ZERO;
            if let (Some(employer_id), true) = (point.employer_id, positive) {
                firsts.entry(employer_id).or_insert(point);
            }
        }
        if firsts.is_empty() {
            return Err(UnavailableReason::NoRegularSalary);
        }

        let references = firsts
            .into_iter()
            .map(|(employer_id, point)| {
                let index = rates.get(point.period).ok_or(UnavailableReason::MissingBaselineIndex)?;
                Ok((employer_id, Reference { point: point.clone(), index }))
            })
            .collect::<Result<HashMap<_, _>, UnavailableReason>>()?;

        Ok(BaselineSetup {
            selector: BaselineSelector::ByEmployer(references),
            base_label: None,
            base_salary: None,
            skip_prehistory: false,
        })
    }
}

//! Baseline strategies
//!
//! A baseline decides, for every timeline point, which earlier salary it is
//! compared against and at what price level. Each [`BaselineMode`] has one
//! strategy; [`strategy_for`] dispatches between them.

mod global;
mod last_increase;
mod manual;
mod per_employer;

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wagearc_domain::{BaselineMode, EmployerId, SalaryEntry, TimelinePoint, UnavailableReason};

pub use global::GlobalBaseline;
pub use last_increase::LastIncreaseBaseline;
pub use manual::ManualBaseline;
pub use per_employer::PerEmployerBaseline;

use crate::timeline::RateIndex;

/// Salary point and index value a month is measured against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub point: TimelinePoint,
    /// Index value of the reference month, never zero
    pub index: Decimal,
}

/// Lookup from a timeline point to its reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineSelector {
    /// One reference for every point
    Fixed(Reference),
    /// Reference chosen by the point's employer
    ByEmployer(HashMap<EmployerId, Reference>),
    /// Reference precomputed per period
    ByPeriod(BTreeMap<NaiveDate, Reference>),
}

impl BaselineSelector {
    pub fn select(&self, point: &TimelinePoint) -> Option<&Reference> {
        match self {
            Self::Fixed(reference) => Some(reference),
            Self::ByEmployer(references) => {
                point.employer_id.and_then(|employer_id| references.get(&employer_id))
            }
            Self::ByPeriod(references) => references.get(&point.period),
        }
    }
}

/// Result of a successful baseline selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineSetup {
    pub selector: BaselineSelector,
    /// Reported for single-reference modes only
    pub base_label: Option<String>,
    pub base_salary: Option<Decimal>,
    /// Points before their reference month get no value
    pub skip_prehistory: bool,
}

impl BaselineSetup {
    /// Setup around a single reference, reporting its label and salary.
    pub(crate) fn fixed(reference: Reference) -> Self {
        Self {
            base_label: Some(reference.point.label.clone()),
            base_salary: Some(reference.point.base_amount),
            selector: BaselineSelector::Fixed(reference),
            skip_prehistory: true,
        }
    }
}

/// Policy picking reference salaries for a timeline
pub trait BaselineStrategy: Send + Sync {
    /// Mode this strategy implements.
    fn mode(&self) -> BaselineMode;

    /// Select references for `timeline`.
    ///
    /// # Errors
    /// Returns the [`UnavailableReason`] explaining why no baseline could be
    /// established (no salary, missing index, unusable manual entry).
    fn setup(
        &self,
        timeline: &[TimelinePoint],
        rates: &RateIndex,
        manual_entry: Option<&SalaryEntry>,
    ) -> Result<BaselineSetup, UnavailableReason>;
}

/// Strategy implementing `mode`.
pub fn strategy_for(mode: BaselineMode) -> &'static dyn BaselineStrategy {
    match mode {
        BaselineMode::Global => &GlobalBaseline,
        BaselineMode::PerEmployer => &PerEmployerBaseline,
        BaselineMode::LastIncrease => &LastIncreaseBaseline,
        BaselineMode::Manual => &ManualBaseline,
    }
}

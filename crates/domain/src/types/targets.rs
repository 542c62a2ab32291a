//! Forward-looking salary targets

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::reasons::UnavailableReason;
use super::salary::EntryId;
use crate::impl_domain_code_conversions;

/// Reference point a target is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    LastRaise,
    EmployerStart,
    ManualBaseline,
}

impl_domain_code_conversions!(TargetKind {
    LastRaise => "last-raise",
    EmployerStart => "employer-start",
    ManualBaseline => "manual-baseline",
});

impl TargetKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LastRaise => "Since last raise",
            Self::EmployerStart => "Since joining current employer",
            Self::ManualBaseline => "Since manual baseline",
        }
    }
}

/// Salary that would keep pace with inflation since a reference entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FutureSalaryTarget {
    pub key: TargetKind,
    pub label: String,
    pub reference_entry_id: EntryId,
    pub reference_date: NaiveDate,
    pub reference_amount: Decimal,
    pub reference_index: Option<Decimal>,
    pub target_salary: Option<Decimal>,
    /// Target minus the current salary
    pub delta_amount: Option<Decimal>,
    pub reason: Option<UnavailableReason>,
}

/// Targets plus an explanation when none could be computed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FutureTargets {
    pub targets: Vec<FutureSalaryTarget>,
    pub message: Option<String>,
    /// Latest month with an index value
    pub period: Option<NaiveDate>,
}

impl FutureTargets {
    /// No targets, with the message for `reason`.
    pub fn unavailable(reason: UnavailableReason, period: Option<NaiveDate>) -> Self {
        Self { targets: Vec::new(), message: Some(reason.message().to_string()), period }
    }
}

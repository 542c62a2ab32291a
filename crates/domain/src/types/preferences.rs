//! Per-user inflation preferences

use serde::{Deserialize, Serialize};

use super::inflation::InflationSource;
use super::salary::{SalaryEntry, UserId};
use crate::impl_domain_code_conversions;

/// Policy used to pick the reference salary a month is compared against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaselineMode {
    /// First regular salary of the whole history
    #[default]
    Global,
    /// First regular salary at each employer
    PerEmployer,
    /// Most recent change of the regular salary
    LastIncrease,
    /// A regular entry picked by the user
    Manual,
}

impl_domain_code_conversions!(BaselineMode {
    Global => "GLOBAL",
    PerEmployer => "PER_EMPLOYER",
    LastIncrease => "LAST_INCREASE",
    Manual => "MANUAL",
});

impl BaselineMode {
    /// Display name shown next to the selector.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Global => "Whole history",
            Self::PerEmployer => "Current employer only",
            Self::LastIncrease => "Last salary increase",
            Self::Manual => "Manual selection",
        }
    }
}

/// Currency used to render amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Chf,
    Cad,
}

impl_domain_code_conversions!(Currency {
    Usd => "USD",
    Eur => "EUR",
    Gbp => "GBP",
    Chf => "CHF",
    Cad => "CAD",
});

/// Snapshot of a user's preferences, resolved by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreference {
    pub user_id: UserId,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub inflation_baseline_mode: BaselineMode,
    #[serde(default)]
    pub inflation_source: Option<InflationSource>,
    /// Entry chosen for [`BaselineMode::Manual`]; only regular entries are
    /// usable
    #[serde(default)]
    pub inflation_manual_entry: Option<SalaryEntry>,
}

impl UserPreference {
    /// Default preferences for a user that never saved any.
    pub fn default_for(user_id: UserId) -> Self {
        Self { user_id, ..Self::default() }
    }
}

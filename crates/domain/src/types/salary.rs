//! Salary history types
//!
//! Entries are owned by the persistence layer; the core only reads them and
//! never writes derived values (bonus ends, inferred regular ends) back.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::impl_domain_code_conversions;

/// Identifier of a user owning salary data
pub type UserId = i64;
/// Identifier of an employer row
pub type EmployerId = i64;
/// Identifier of a salary entry row
pub type EntryId = i64;

/// Employer a salary entry belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    pub id: EmployerId,
    pub name: String,
}

impl Employer {
    pub fn new(id: EmployerId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Kind of salary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    /// Recurring monthly pay, active until its end or the next regular entry
    Regular,
    /// Lump sum amortized evenly over the months it covers
    Bonus,
}

impl_domain_code_conversions!(EntryType {
    Regular => "REGULAR",
    Bonus => "BONUS",
});

/// A single row of a user's salary history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryEntry {
    pub id: EntryId,
    pub employer_id: EmployerId,
    /// Employer display name, when the repository joined it in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_name: Option<String>,
    pub entry_type: EntryType,
    pub effective_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl SalaryEntry {
    /// Whether this entry is recurring pay.
    pub fn is_regular(&self) -> bool {
        self.entry_type == EntryType::Regular
    }

    /// Whether this entry is a bonus.
    pub fn is_bonus(&self) -> bool {
        self.entry_type == EntryType::Bonus
    }

    /// Sort key used wherever entries are ordered chronologically.
    pub fn chronological_key(&self) -> (NaiveDate, DateTime<Utc>) {
        (self.effective_date, self.created_at)
    }

    /// Concrete amortization end for a bonus.
    ///
    /// Returns the stored end date when present, otherwise
    /// [`default_bonus_end`] of the effective date.
    pub fn bonus_end(&self) -> NaiveDate {
        self.end_date.unwrap_or_else(|| default_bonus_end(self.effective_date))
    }

    /// Last day this entry contributes pay, with open regular entries
    /// running until `today`.
    pub fn coverage_end(&self, today: NaiveDate) -> NaiveDate {
        if self.is_bonus() {
            self.bonus_end()
        } else {
            self.end_date.unwrap_or(today)
        }
    }
}

/// Default end for a bonus that was entered without one: the day before its
/// first anniversary.
///
/// A 29 February start has no anniversary; the start plus 365 days stands in
/// for it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wagearc_domain::types::default_bonus_end;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(default_bonus_end(start), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
/// ```
#[must_use]
pub fn default_bonus_end(effective: NaiveDate) -> NaiveDate {
    let anniversary = effective
        .with_year(effective.year() + 1)
        .or_else(|| effective.checked_add_signed(Duration::days(365)))
        .unwrap_or(effective);
    anniversary.pred_opt().unwrap_or(effective).max(effective)
}

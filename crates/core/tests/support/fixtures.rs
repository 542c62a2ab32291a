//! Salary and inflation fixtures

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use wagearc_domain::{
    EmployerId, EntryId, EntryType, InflationRecord, InflationSource, SalaryEntry, SourceId,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn month(year: i32, month: u32) -> NaiveDate {
    date(year, month, 1)
}

pub fn regular(id: EntryId, employer_id: EmployerId, start: NaiveDate, amount: i64) -> SalaryEntry {
    SalaryEntry {
        id,
        employer_id,
        employer_name: Some(format!("Employer {employer_id}")),
        entry_type: EntryType::Regular,
        effective_date: start,
        end_date: None,
        amount: Decimal::from(amount),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn bonus(
    id: EntryId,
    employer_id: EmployerId,
    start: NaiveDate,
    end: Option<NaiveDate>,
    amount: i64,
) -> SalaryEntry {
    SalaryEntry { entry_type: EntryType::Bonus, end_date: end, ..regular(id, employer_id, start, amount) }
}

pub fn source(id: SourceId, code: &str, label: &str, published: bool) -> InflationSource {
    InflationSource {
        id,
        code: code.to_string(),
        label: label.to_string(),
        description: String::new(),
        is_active: true,
        available_to_users: published,
    }
}

/// One record per `(period, value)` pair
pub fn records(pairs: &[(NaiveDate, i64)]) -> Vec<InflationRecord> {
    pairs.iter().map(|&(period, value)| InflationRecord::new(period, Decimal::from(value))).collect()
}

//! Manual baseline: the user picks the regular entry to compare against

use rust_decimal::Decimal;
use wagearc_domain::utils::months::month_start;
use wagearc_domain::{BaselineMode, SalaryEntry, TimelinePoint, UnavailableReason};

use super::{BaselineSetup, BaselineStrategy, Reference};
use crate::timeline::RateIndex;

/// The month of a user-selected regular entry is the single reference
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualBaseline;

impl BaselineStrategy for ManualBaseline {
    fn mode(&self) -> BaselineMode {
        BaselineMode::Manual
    }

    fn setup(
        &self,
        timeline: &[TimelinePoint],
        rates: &RateIndex,
        manual_entry: Option<&SalaryEntry>,
    ) -> Result<BaselineSetup, UnavailableReason> {
        let entry = manual_entry
            .filter(|entry| entry.is_regular())
            .ok_or(UnavailableReason::ManualBaselineUnset)?;
        let period = month_start(entry.effective_date);
        let point = timeline
            .iter()
            .find(|point| point.period == period)
            .filter(|point| point.base_amount > Decimal::ZERO)
            .ok_or(UnavailableReason::ManualBaselineInvalid)?;
        let index = rates.get(point.period).ok_or(UnavailableReason::MissingBaselineIndex)?;
        Ok(BaselineSetup::fixed(Reference { point: point.clone(), index }))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use wagearc_domain::EntryType;

    use super::*;
    use crate::baseline::test_support::{date, points, rates};

    fn manual(kind: EntryType, effective: NaiveDate) -> SalaryEntry {
        SalaryEntry {
            id: 42,
            employer_id: 1,
            employer_name: None,
            entry_type: kind,
            effective_date: effective,
            end_date: None,
            amount: Decimal::from(1200),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn unset_or_bonus_entry() {
        let timeline = points(date(2024, 1), &[(1000, Some(1))]);
        let index = rates(date(2024, 1), &[100]);
        assert_eq!(
            ManualBaseline.setup(&timeline, &index, None).unwrap_err(),
            UnavailableReason::ManualBaselineUnset
        );
        let bonus = manual(EntryType::Bonus, date(2024, 1));
        assert_eq!(
            ManualBaseline.setup(&timeline, &index, Some(&bonus)).unwrap_err(),
            UnavailableReason::ManualBaselineUnset
        );
    }

    #[test]
    fn entry_outside_timeline_or_at_zero_base_is_invalid() {
        let timeline = points(date(2024, 1), &[(1000, Some(1)), (0, None)]);
        let index = rates(date(2024, 1), &[100, 101]);
        let outside = manual(EntryType::Regular, date(2025, 1));
        assert_eq!(
            ManualBaseline.setup(&timeline, &index, Some(&outside)).unwrap_err(),
            UnavailableReason::ManualBaselineInvalid
        );
        let zero = manual(EntryType::Regular, date(2024, 2));
        assert_eq!(
            ManualBaseline.setup(&timeline, &index, Some(&zero)).unwrap_err(),
            UnavailableReason::ManualBaselineInvalid
        );
    }

    #[test]
    fn valid_entry_reports_label_and_salary() {
        let timeline = points(date(2024, 1), &[(1000, Some(1)), (1200, Some(1))]);
        let index = rates(date(2024, 1), &[100, 104]);
        let entry = manual(EntryType::Regular, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        let setup = ManualBaseline.setup(&timeline, &index, Some(&entry)).unwrap();
        assert_eq!(setup.base_label.as_deref(), Some("Feb 2024"));
        assert_eq!(setup.base_salary, Some(Decimal::from(1200)));
        assert!(setup.skip_prehistory);
    }

    #[test]
    fn missing_index_for_selected_month() {
        let timeline = points(date(2024, 1), &[(1000, Some(1)), (1200, Some(1))]);
        let index = rates(date(2024, 1), &[100]);
        let entry = manual(EntryType::Regular, date(2024, 2));
        assert_eq!(
            ManualBaseline.setup(&timeline, &index, Some(&entry)).unwrap_err(),
            UnavailableReason::MissingBaselineIndex
        );
    }
}

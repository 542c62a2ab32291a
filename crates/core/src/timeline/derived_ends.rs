//! Effective end dates of open-ended regular salary entries
//!
//! A regular entry stays active until its own end date or, when the user
//! recorded a later regular entry, the day before that entry begins. The
//! stored entries are never modified; the inferred ends live here and are
//! consulted through [`DerivedEndDates::resolve`].

use std::collections::HashMap;

use chrono::NaiveDate;
use wagearc_domain::{EntryId, SalaryEntry};

/// Inferred end dates keyed by entry id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedEndDates {
    ends: HashMap<EntryId, NaiveDate>,
}

impl DerivedEndDates {
    /// Derive ends from every regular entry of one user.
    ///
    /// Entries are ordered by `(effective_date, created_at)` across all
    /// employers. For each entry followed by another, the end becomes the
    /// next start minus one day when the entry has no end or its end reaches
    /// the next start. The derived end is never earlier than the entry's own
    /// effective date.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a SalaryEntry>) -> Self {
        let mut regular: Vec<&SalaryEntry> =
            entries.into_iter().filter(|entry| entry.is_regular()).collect();
        regular.sort_by_key(|entry| entry.chronological_key());

        let mut ends = HashMap::new();
        for pair in regular.windows(2) {
            let (entry, next) = (pair[0], pair[1]);
            let next_start = next.effective_date;
            let overlaps = entry.end_date.map_or(true, |end| end >= next_start);
            if !overlaps {
                continue;
            }
            let derived = next_start.pred_opt().unwrap_or(next_start).max(entry.effective_date);
            ends.insert(entry.id, derived);
        }
        Self { ends }
    }

    /// Derived end for `id`, if one was inferred.
    pub fn get(&self, id: EntryId) -> Option<NaiveDate> {
        self.ends.get(&id).copied()
    }

    /// End date to use for `entry`: the derived one, else its stored end.
    pub fn resolve(&self, entry: &SalaryEntry) -> Option<NaiveDate> {
        self.get(entry.id).or(entry.end_date)
    }

    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }
}

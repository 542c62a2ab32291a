//! Time source port
//!
//! Every computation that depends on "today" (open-ended timelines, the last
//! complete month, freshness checks) reads it through [`Clock`] so tests can
//! pin the date.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current date and instant
pub trait Clock: Send + Sync {
    /// Current calendar date.
    fn today(&self) -> NaiveDate;

    /// Current instant, used for `fetched_at` stamps.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock in UTC
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Clock at midnight UTC of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self { instant: date.and_time(chrono::NaiveTime::MIN).and_utc() }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

//! Salary timeline construction

pub mod builder;
pub mod derived_ends;
pub mod rate_index;

pub use builder::{Timeline, TimelineBuilder};
pub use derived_ends::DerivedEndDates;
pub use rate_index::RateIndex;

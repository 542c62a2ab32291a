//! Domain types
//!
//! Salary history and inflation inputs come in from the persistence layer;
//! timeline, report and target types are produced by the core.

pub mod inflation;
pub mod preferences;
pub mod reasons;
pub mod reports;
pub mod salary;
pub mod targets;
pub mod timeline;

pub use inflation::{
    InflationRate, InflationRecord, InflationSource, RecordMetadata, RefreshResult, SourceId,
    UpsertCounts,
};
pub use preferences::{BaselineMode, Currency, UserPreference};
pub use reasons::{DeltaState, UnavailableReason};
pub use reports::{
    EmployerCompSummary, GapReport, InflationGap, InflationGapReport, MonthlyComparison,
};
pub use salary::{default_bonus_end, Employer, EmployerId, EntryId, EntryType, SalaryEntry, UserId};
pub use targets::{FutureSalaryTarget, FutureTargets, TargetKind};
pub use timeline::{BonusWindow, EmployerSwitch, InflationMeta, TimelinePayload, TimelinePoint};

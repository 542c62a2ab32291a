//! Compensation timeline, summary and report use cases

pub mod ports;
pub mod service;

pub use ports::{PreferenceRepository, SalaryEntryRepository};
pub use service::CompensationService;

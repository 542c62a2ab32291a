//! # WageArc Domain
//!
//! Business domain types for the WageArc salary and inflation engine.
//!
//! This crate contains:
//! - Salary, inflation and preference types
//! - Timeline, summary, gap and target result types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Month arithmetic and decimal rounding helpers
//!
//! ## Architecture
//! - No dependencies on other WageArc crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

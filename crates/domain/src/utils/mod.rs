//! Pure utility functions shared by the domain and core crates

pub mod money;
pub mod months;

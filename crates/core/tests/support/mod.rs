//! Shared test helpers for `wagearc-core` integration tests.
//!
//! In-memory repositories and a scripted fetcher so the service tests can
//! focus on behaviour instead of storage.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;

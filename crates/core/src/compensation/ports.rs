//! Port interfaces for salary data
//!
//! These traits define the boundaries between the compensation service and
//! the storage of user-owned data.

use async_trait::async_trait;
use wagearc_domain::{Employer, Result, SalaryEntry, UserId, UserPreference};

/// Trait for reading a user's salary history
#[async_trait]
pub trait SalaryEntryRepository: Send + Sync {
    /// All entries of `user_id`, with employer names joined in
    async fn entries_for_user(&self, user_id: UserId) -> Result<Vec<SalaryEntry>>;

    /// Employers of `user_id`, ordered by name
    async fn employers_for_user(&self, user_id: UserId) -> Result<Vec<Employer>>;
}

/// Trait for reading inflation preferences
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Stored preferences, or [`UserPreference::default_for`] when none exist
    async fn get_or_default(&self, user_id: UserId) -> Result<UserPreference>;
}

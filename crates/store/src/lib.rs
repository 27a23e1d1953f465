//! # PawPlan Store
//!
//! Per-day completion state for generated potty schedules.
//!
//! The schedule generator never sees this state. A rendering layer loads the set
//! of completed event ids for a `(dog, date)` pair and merges it into a freshly
//! generated schedule. Entries are keyed by calendar date, so a new day always
//! starts with an empty set.

pub mod completion;
pub mod memory;

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use mockall::automock;

pub use memory::InMemoryCompletionStore;

/// Key-value store of completed event ids.
#[automock]
#[async_trait]
pub trait CompletionStore: Send + Sync {
    /// Completed event ids for a dog on a date, empty when nothing was recorded.
    async fn get(&self, dog_id: &str, date: NaiveDate) -> Result<BTreeSet<String>>;

    /// Replaces the completed set for a dog on a date.
    async fn set(&self, dog_id: &str, date: NaiveDate, completed: BTreeSet<String>) -> Result<()>;
}

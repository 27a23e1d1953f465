use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use tokio::sync::RwLock;

use crate::CompletionStore;

type Key = (String, NaiveDate);

/// Process-local store, lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryCompletionStore {
    entries: RwLock<HashMap<Key, BTreeSet<String>>>,
}

impl InMemoryCompletionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompletionStore for InMemoryCompletionStore {
    async fn get(&self, dog_id: &str, date: NaiveDate) -> Result<BTreeSet<String>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(&(dog_id.to_string(), date))
            .cloned()
            .unwrap_or_default())
    }

    async fn set(&self, dog_id: &str, date: NaiveDate, completed: BTreeSet<String>) -> Result<()> {
        let mut entries = self.entries.write().await;
        let key = (dog_id.to_string(), date);

        if completed.is_empty() {
            entries.remove(&key);
        } else {
            entries.insert(key, completed);
        }

        Ok(())
    }
}

//! # Activity Repository
//!
//! Persists the whole activity list as a JSON array under a single key of a
//! [`KeyValueStore`]:
//!
//! ```json
//! [
//!   {"id": "8c0f...", "category": 1, "name": "Salad", "calories": 300},
//!   {"id": "1b7e...", "category": 2, "name": "Running", "calories": 200}
//! ]
//! ```

use anyhow::{Context, Result};
use log::debug;
use shared::Activity;
use std::sync::Arc;

use crate::storage::traits::{ActivityStorage, KeyValueStore};

/// Default storage key for the activity list
pub const ACTIVITIES_KEY: &str = "activities";

/// Activity list repository on top of any key-value store
pub struct ActivityRepository<K: KeyValueStore> {
    store: Arc<K>,
    key: String,
}

impl<K: KeyValueStore> Clone for ActivityRepository<K> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key.clone(),
        }
    }
}

impl<K: KeyValueStore> ActivityRepository<K> {
    /// Create a repository using the default `activities` key
    pub fn new(store: Arc<K>) -> Self {
        Self::with_key(store, ACTIVITIES_KEY)
    }

    pub fn with_key(store: Arc<K>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &K {
        &self.store
    }
}

impl<K: KeyValueStore> ActivityStorage for ActivityRepository<K> {
    fn load_activities(&self) -> Result<Option<Vec<Activity>>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        let activities: Vec<Activity> = serde_json::from_str(&raw)
            .with_context(|| format!("Stored value under '{}' is not a valid activity list", self.key))?;

        debug!("Loaded {} activities from '{}'", activities.len(), self.key);
        Ok(Some(activities))
    }

    fn save_activities(&self, activities: &[Activity]) -> Result<()> {
        let serialized = serde_json::to_string(activities)
            .context("Failed to serialize activity list")?;
        self.store.set(&self.key, &serialized)?;

        debug!("Saved {} activities to '{}'", activities.len(), self.key);
        Ok(())
    }
}

//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use shared::Activity;

/// Raw string key-value storage, one value per key.
///
/// This is the equivalent of per-browser local storage: the activity list and
/// any other persisted record live under a fixed key as serialized text.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key` (no-op if absent)
    fn remove(&self, key: &str) -> Result<()>;
}

/// Trait defining the interface for activity list persistence
///
/// The activity store only ever reads the whole list once at startup and
/// writes the whole list after each change, so there is no per-entry API.
pub trait ActivityStorage: Send + Sync {
    /// Load the persisted activity list.
    /// Returns `Ok(None)` when nothing has been stored yet and an error when
    /// the stored value cannot be read or parsed.
    fn load_activities(&self) -> Result<Option<Vec<Activity>>>;

    /// Replace the persisted activity list
    fn save_activities(&self, activities: &[Activity]) -> Result<()>;
}

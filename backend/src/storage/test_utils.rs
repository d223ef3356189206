//! Test utilities module for automatic cleanup and consistent test infrastructure
//!
//! This module provides RAII-based cleanup that guarantees test data is removed
//! even if tests panic or fail.

use anyhow::{anyhow, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

use super::json::JsonFileStore;
use super::traits::KeyValueStore;

/// Test environment that provides a temporary directory and file store
/// that will be automatically cleaned up when the environment is dropped.
pub struct TestEnvironment {
    pub file_store: JsonFileStore,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let file_store = JsonFileStore::new(temp_dir.path())?;
        Ok(Self {
            file_store,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// Key-value store whose writes always fail, for exercising persistence errors.
/// Reads return whatever was configured up front.
#[derive(Default)]
pub struct FailingStore {
    pub initial_value: Option<String>,
    pub write_attempts: AtomicUsize,
}

impl FailingStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            initial_value: Some(value.to_string()),
            write_attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.write_attempts.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(self.initial_value.clone())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        Err(anyhow!("storage quota exceeded"))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(anyhow!("storage quota exceeded"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
            // Environment dropped here
        }
        assert!(!base_path.exists());
        Ok(())
    }

    #[test]
    fn test_failing_store_counts_writes() {
        let store = FailingStore::default();
        assert!(store.set("activities", "[]").is_err());
        assert!(store.set("activities", "[]").is_err());
        assert_eq!(store.attempts(), 2);
    }
}

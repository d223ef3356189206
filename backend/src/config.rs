//! # Backend Configuration
//!
//! Where data lives and how the activity form behaves. Values come from, in
//! order of precedence:
//! 1. Environment overrides (`CALORIE_TRACKER_DATA_DIR`)
//! 2. A YAML file (path from `CALORIE_TRACKER_CONFIG`, if set)
//! 3. Built-in defaults
//!
//! ## YAML Format
//!
//! ```yaml
//! data_directory: "/home/me/.local/share/Calorie Tracker"
//! activities_key: "activities"
//! form:
//!   default_category: 1
//!   negative_calories_message: "Calories cannot be negative."
//! ```

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use shared::ActivityFormConfig;
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::ACTIVITIES_KEY;

pub const CONFIG_PATH_ENV: &str = "CALORIE_TRACKER_CONFIG";
pub const DATA_DIR_ENV: &str = "CALORIE_TRACKER_DATA_DIR";

const DATA_DIRECTORY_NAME: &str = "Calorie Tracker";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Directory holding one JSON file per storage key
    pub data_directory: PathBuf,
    /// Storage key of the activity list
    pub activities_key: String,
    /// Activity form rules
    pub form: ActivityFormConfig,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            data_directory: Self::default_data_directory(),
            activities_key: ACTIVITIES_KEY.to_string(),
            form: ActivityFormConfig::default(),
        }
    }
}

impl BackendConfig {
    /// Platform data directory, falling back to home and then the temp directory
    pub fn default_data_directory() -> PathBuf {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(std::env::temp_dir)
            .join(DATA_DIRECTORY_NAME)
    }

    /// Load a YAML config file; a missing file yields the defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: BackendConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Build the config from the process environment
    pub fn from_env() -> Result<Self> {
        let lookup = |name: &str| std::env::var(name).ok();

        let config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        Ok(config.with_overrides(lookup))
    }

    /// Apply environment-style overrides using `lookup` to read variables
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
            info!("Data directory overridden by {}: {}", DATA_DIR_ENV, dir);
            self.data_directory = PathBuf::from(dir);
        }
        self
    }

    /// Persist this config as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let yaml_content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }
}

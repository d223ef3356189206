//! # Calorie Tracker Backend
//!
//! Contains all non-UI logic for the calorie tracker.
//!
//! - **Domain**: The activity store, calorie metrics and form rules
//! - **Storage**: Persistence of the activity list to a key-value store
//! - **Config**: Data directory and form settings
//!
//! ## Architecture
//!
//! ```text
//! UI layer (any frontend)
//!     ↓ dispatch(action)
//! Domain layer (ActivityStore → reduce → MetricsCalculator)
//!     ↓ save_activities
//! Storage layer (ActivityRepository → KeyValueStore)
//! ```
//!
//! The store is an explicitly owned value: a frontend creates one [`Backend`]
//! and hands references to whatever needs to read or dispatch.

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub use config::BackendConfig;
pub use domain::*;
pub use storage::{ActivityRepository, ActivityStorage, JsonFileStore, KeyValueStore, MemoryStore};

/// Main backend struct that wires the store to file storage
pub struct Backend {
    pub activity_store: ActivityStore<ActivityRepository<JsonFileStore>>,
    pub activity_form_service: ActivityFormService,
    pub metrics_calculator: MetricsCalculator,
}

impl Backend {
    /// Create a backend configured from the environment
    pub fn new() -> Result<Self> {
        Self::with_config(BackendConfig::from_env()?)
    }

    /// Create a backend from an explicit configuration
    pub fn with_config(config: BackendConfig) -> Result<Self> {
        info!("Setting up storage in {}", config.data_directory.display());
        let file_store = Arc::new(JsonFileStore::new(&config.data_directory)?);
        let repository = ActivityRepository::with_key(file_store, config.activities_key.clone());

        info!("Setting up domain services");
        let activity_store = ActivityStore::new(repository);
        let activity_form_service = ActivityFormService::with_config(config.form);
        let metrics_calculator = MetricsCalculator::new();

        Ok(Backend {
            activity_store,
            activity_form_service,
            metrics_calculator,
        })
    }
}

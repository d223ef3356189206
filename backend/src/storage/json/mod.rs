//! # JSON Storage Module
//!
//! File-based storage for the calorie tracker. Every storage key maps to one
//! JSON file in the data directory, written atomically via a temp file.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! └── activities.json    ← activity list (see activity_repository)
//! ```

pub mod activity_repository;
pub mod connection;

pub use activity_repository::{ActivityRepository, ACTIVITIES_KEY};
pub use connection::JsonFileStore;

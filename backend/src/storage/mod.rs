//! # Storage Module
//!
//! Handles all data persistence for the calorie tracker.
//!
//! The domain layer only sees the [`ActivityStorage`] trait. Underneath it, the
//! activity list is serialized to JSON and kept under a fixed key of a
//! [`KeyValueStore`], which is either a directory of JSON files on disk or an
//! in-memory map.
//!
//! ## Key Responsibilities
//!
//! - **Data Persistence**: Writing the full activity list after each change
//! - **Data Retrieval**: Reading it back once at startup
//! - **Storage Abstraction**: Swapping file and in-memory backends without touching the domain

pub mod json;
pub mod memory;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use json::{ActivityRepository, JsonFileStore, ACTIVITIES_KEY};
pub use memory::MemoryStore;
pub use traits::{ActivityStorage, KeyValueStore};

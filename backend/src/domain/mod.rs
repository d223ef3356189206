//! # Domain Module
//!
//! Contains all business logic for the calorie tracker.
//!
//! ## Module Organization
//!
//! - **activity_store**: The owned activity list, edit selection and the
//!   `reduce` transition function behind `dispatch`
//! - **metrics**: Consumed / burned / net calorie totals and category labels
//! - **activity_form**: Draft handling and validation for the add/edit form
//! - **commands**: Actions the store accepts and the outcomes it reports
//! - **models**: Store state types
//!
//! ## Business Rules
//!
//! - Activities must have a non-empty name and more than zero calories
//! - Food adds to consumed calories, exercise adds to burned calories
//! - Saving an existing id edits in place, a new id is appended
//! - Deleting or selecting an unknown id does nothing
//! - Totals are always recomputed from the list, never stored

pub mod activity_form;
pub mod activity_store;
pub mod commands;
pub mod errors;
pub mod metrics;
pub mod models;

pub use activity_form::*;
pub use activity_store::*;
pub use commands::activities::{ActivityAction, DispatchOutcome};
pub use commands::form::FormCommand;
pub use errors::StoreError;
pub use metrics::*;
pub use models::ActivityState;

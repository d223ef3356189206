//! Activity store for the calorie tracker.
//!
//! The store owns the activity list and the edit selection. All changes go
//! through [`ActivityStore::dispatch`], which:
//! 1. Validates `SaveActivity` payloads at the boundary
//! 2. Computes the next state with the pure [`reduce`] function
//! 3. Writes the full list to storage when it changed
//!
//! A failed write is logged and reported in the outcome, but the in-memory
//! state keeps the new value. Writes happen synchronously after each
//! transition, so storage never ends up holding an older state than a later
//! write.

use log::{debug, info, warn};
use once_cell::sync::OnceCell;
use shared::{Activity, CalorieSummary};
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::commands::activities::{ActivityAction, DispatchOutcome};
use crate::domain::errors::StoreError;
use crate::domain::metrics::MetricsCalculator;
use crate::domain::models::ActivityState;
use crate::storage::{ActivityRepository, ActivityStorage, MemoryStore};

/// Compute the state that follows `state` under `action`.
///
/// Total over all inputs: unknown ids on delete or select leave the state as is.
pub fn reduce(state: &ActivityState, action: &ActivityAction) -> ActivityState {
    match action {
        ActivityAction::SaveActivity { activity } => {
            let mut activities = state.activities.clone();
            match state.position(&activity.id) {
                Some(index) => activities[index] = activity.clone(),
                None => activities.push(activity.clone()),
            }
            ActivityState {
                activities,
                active_id: state.active_id.clone(),
            }
        }
        ActivityAction::DeleteActivity { id } => ActivityState {
            activities: state
                .activities
                .iter()
                .filter(|activity| activity.id != *id)
                .cloned()
                .collect(),
            active_id: state.active_id.clone(),
        },
        ActivityAction::SetActiveId { id: Some(id) } if !state.contains(id) => state.clone(),
        ActivityAction::SetActiveId { id } => ActivityState {
            activities: state.activities.clone(),
            active_id: id.clone(),
        },
        ActivityAction::Restart => ActivityState::default(),
    }
}

/// Single owner of the activity list and selection
pub struct ActivityStore<S: ActivityStorage> {
    state: ActivityState,
    storage: S,
    calculator: MetricsCalculator,
    summary_cache: OnceCell<CalorieSummary>,
}

impl ActivityStore<ActivityRepository<MemoryStore>> {
    /// Store backed by a fresh in-memory key-value store
    pub fn in_memory() -> Self {
        Self::new(ActivityRepository::new(Arc::new(MemoryStore::new())))
    }
}

impl<S: ActivityStorage> ActivityStore<S> {
    /// Create a store, hydrating the activity list from `storage`
    pub fn new(storage: S) -> Self {
        let state = Self::hydrate(&storage);
        info!("Activity store ready with {} activities", state.activities.len());

        Self {
            state,
            storage,
            calculator: MetricsCalculator::new(),
            summary_cache: OnceCell::new(),
        }
    }

    /// Load persisted activities; anything unreadable hydrates to an empty list
    fn hydrate(storage: &S) -> ActivityState {
        match storage.load_activities() {
            Ok(Some(activities)) => ActivityState::with_activities(Self::sanitize(activities)),
            Ok(None) => {
                info!("No persisted activities found, starting with an empty list");
                ActivityState::default()
            }
            Err(e) => {
                warn!("Failed to load persisted activities, starting with an empty list: {:#}", e);
                ActivityState::default()
            }
        }
    }

    /// Drop persisted entries that break the list invariants
    fn sanitize(activities: Vec<Activity>) -> Vec<Activity> {
        let mut seen_ids = HashSet::new();
        let mut kept = Vec::with_capacity(activities.len());

        for activity in activities {
            if let Err(e) = Self::validate(&activity) {
                warn!("Dropping persisted activity: {}", e);
                continue;
            }
            if !seen_ids.insert(activity.id.clone()) {
                warn!("Dropping persisted activity with duplicate id '{}'", activity.id);
                continue;
            }
            kept.push(activity);
        }

        kept
    }

    fn validate(activity: &Activity) -> Result<(), StoreError> {
        let reason = if activity.id.trim().is_empty() {
            "id must not be empty"
        } else if activity.name.trim().is_empty() {
            "name must not be empty"
        } else if activity.calories == 0 {
            "calories must be greater than zero"
        } else {
            return Ok(());
        };

        Err(StoreError::InvalidActivity {
            id: activity.id.clone(),
            reason: reason.to_string(),
        })
    }

    /// Validate a candidate activity and normalize its name
    fn admit(mut activity: Activity) -> Result<Activity, StoreError> {
        Self::validate(&activity)?;
        let trimmed = activity.name.trim();
        if trimmed.len() != activity.name.len() {
            activity.name = trimmed.to_string();
        }
        Ok(activity)
    }

    /// Apply an action to the store.
    ///
    /// Only a `SaveActivity` with an invalid payload is rejected; in that case
    /// nothing changes and nothing is written.
    pub fn dispatch(&mut self, action: ActivityAction) -> Result<DispatchOutcome, StoreError> {
        debug!("Dispatching {}", action.kind());

        let action = match action {
            ActivityAction::SaveActivity { activity } => ActivityAction::SaveActivity {
                activity: Self::admit(activity)?,
            },
            other => other,
        };

        let next = reduce(&self.state, &action);
        let collection_changed = next.activities != self.state.activities;
        let is_restart = matches!(action, ActivityAction::Restart);

        let message = match &action {
            ActivityAction::SaveActivity { activity } => {
                info!("Saved activity '{}' ({}, {} kcal)", activity.id, activity.category, activity.calories);
                Some("Activity saved successfully".to_string())
            }
            ActivityAction::DeleteActivity { id } if collection_changed => {
                info!("Deleted activity '{}'", id);
                Some("Activity deleted successfully".to_string())
            }
            ActivityAction::DeleteActivity { id } => {
                debug!("Delete of unknown activity '{}' ignored", id);
                None
            }
            ActivityAction::SetActiveId { id } => {
                if id.is_some() && next.active_id != *id {
                    debug!("Selection of unknown activity {:?} ignored", id);
                } else {
                    debug!("Active activity set to {:?}", next.active_id);
                }
                None
            }
            ActivityAction::Restart => {
                info!("Restarted: cleared {} activities", self.state.activities.len());
                Some("App successfully restarted".to_string())
            }
        };

        self.state = next;
        if collection_changed {
            self.summary_cache = OnceCell::new();
        }

        // Restart always rewrites storage so an unreadable stored value is replaced too
        let persistence_warning = if collection_changed || is_restart {
            self.persist()
        } else {
            None
        };

        Ok(DispatchOutcome {
            collection_changed,
            message,
            persistence_warning,
        })
    }

    fn persist(&self) -> Option<String> {
        match self.storage.save_activities(&self.state.activities) {
            Ok(()) => None,
            Err(e) => {
                warn!("Failed to persist activities, keeping in-memory state: {:#}", e);
                Some(format!("Could not save activities: {}", e))
            }
        }
    }

    pub fn state(&self) -> &ActivityState {
        &self.state
    }

    pub fn activities(&self) -> &[Activity] {
        &self.state.activities
    }

    pub fn active_id(&self) -> Option<&str> {
        self.state.active_id.as_deref()
    }

    pub fn selected_activity(&self) -> Option<&Activity> {
        self.state.selected_activity()
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    /// Calorie totals for the current list, memoized until the list changes
    pub fn summary(&self) -> CalorieSummary {
        *self
            .summary_cache
            .get_or_init(|| self.calculator.calculate_summary(&self.state.activities))
    }

    pub fn category_label(&self, code: u8) -> Result<&'static str, StoreError> {
        self.calculator.category_label(code)
    }

    pub fn is_empty(&self) -> bool {
        self.calculator.is_empty(&self.state.activities)
    }

    /// Restart is only offered when there is something to clear
    pub fn can_restart(&self) -> bool {
        !self.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

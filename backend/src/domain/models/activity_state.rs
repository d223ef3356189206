//! Domain model for the activity store state.
use shared::Activity;

/// The pair the store owns: the activity list and the current edit selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityState {
    /// Activities in insertion order, unique by id
    pub activities: Vec<Activity>,
    /// ID of the activity open for editing, `None` when not editing
    pub active_id: Option<String>,
}

impl ActivityState {
    /// Create a state holding `activities` with nothing selected
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            active_id: None,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.activities.iter().position(|activity| activity.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// The activity currently open for editing, if the selection still resolves
    pub fn selected_activity(&self) -> Option<&Activity> {
        self.active_id.as_deref().and_then(|id| self.find(id))
    }

    pub fn is_editing(&self) -> bool {
        self.active_id.is_some()
    }
}

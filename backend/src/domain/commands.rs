//! Domain-level command types for the activity store.
//! Every state change goes through one of these actions; the outcome type
//! reports what happened so the caller can show a message.

pub mod activities {
    use shared::Activity;

    /// The closed set of state transitions the activity store accepts
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ActivityAction {
        /// Insert a new activity, or replace the one with the same id in place
        SaveActivity { activity: Activity },
        /// Remove the activity with this id, if present
        DeleteActivity { id: String },
        /// Enter edit mode for an id, or leave it with `None`
        SetActiveId { id: Option<String> },
        /// Clear every activity and the selection
        Restart,
    }

    impl ActivityAction {
        pub fn save(activity: Activity) -> Self {
            ActivityAction::SaveActivity { activity }
        }

        pub fn delete(id: impl Into<String>) -> Self {
            ActivityAction::DeleteActivity { id: id.into() }
        }

        pub fn select(id: impl Into<String>) -> Self {
            ActivityAction::SetActiveId { id: Some(id.into()) }
        }

        pub fn clear_selection() -> Self {
            ActivityAction::SetActiveId { id: None }
        }

        /// Short name used in log lines
        pub fn kind(&self) -> &'static str {
            match self {
                ActivityAction::SaveActivity { .. } => "save-activity",
                ActivityAction::DeleteActivity { .. } => "delete-activity",
                ActivityAction::SetActiveId { .. } => "set-active-id",
                ActivityAction::Restart => "restart-app",
            }
        }
    }

    /// Result of dispatching an action.
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct DispatchOutcome {
        /// Whether the activity list differs from before the action
        pub collection_changed: bool,
        /// User-facing confirmation, if the action warrants one
        pub message: Option<String>,
        /// Set when the new state could not be persisted; the in-memory state is still updated
        pub persistence_warning: Option<String>,
    }

    impl DispatchOutcome {
        pub fn is_persisted(&self) -> bool {
            self.persistence_warning.is_none()
        }
    }
}

pub mod form {
    use super::activities::ActivityAction;

    /// What the form asks the store to do, with the confirmation to show afterwards
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct FormCommand {
        pub action: ActivityAction,
        pub message: String,
    }
}

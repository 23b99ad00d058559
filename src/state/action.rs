//! Actions accepted by the activity reducer.

use crate::model::Activity;

/// A tagged action dispatched to [`ActivityState`](super::ActivityState).
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityAction {
    /// Insert a new activity, or replace the one with the same id.
    SaveActivity { activity: Activity },
    /// Mark an existing activity as the one being edited.
    SetActiveId { id: String },
    /// Remove an activity from the list.
    DeleteActivity { id: String },
    /// Clear every activity and the active selection.
    RestartApp,
}

impl ActivityAction {
    /// The kebab-case tag for this action, as used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SaveActivity { .. } => "save-activity",
            Self::SetActiveId { .. } => "set-active-id",
            Self::DeleteActivity { .. } => "delete-activity",
            Self::RestartApp => "restart-app",
        }
    }
}

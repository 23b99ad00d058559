use tracing::debug;

use crate::model::Activity;

use super::action::ActivityAction;
use super::summary::CalorieSummary;

/// Owns the activity list and the active (being edited) selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityState {
    activities: Vec<Activity>,
    active_id: Option<String>,
}

impl ActivityState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state seeded with existing activities and no selection.
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            active_id: None,
        }
    }

    /// All saved activities, in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// The id of the activity currently selected for editing, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Looks up an activity by id.
    pub fn find(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Calorie totals over the current list.
    pub fn summary(&self) -> CalorieSummary {
        CalorieSummary::from_activities(&self.activities)
    }

    /// Applies an action to the state.
    pub fn apply(&mut self, action: ActivityAction) {
        debug!(kind = action.kind(), "applying activity action");
        match action {
            ActivityAction::SaveActivity { activity } => {
                match self.activities.iter_mut().find(|a| a.id == activity.id) {
                    Some(existing) => *existing = activity,
                    None => self.activities.push(activity),
                }
                self.active_id = None;
            }
            ActivityAction::SetActiveId { id } => {
                self.active_id = Some(id);
            }
            ActivityAction::DeleteActivity { id } => {
                self.activities.retain(|a| a.id != id);
                if self.active_id.as_deref() == Some(id.as_str()) {
                    self.active_id = None;
                }
            }
            ActivityAction::RestartApp => {
                self.activities.clear();
                self.active_id = None;
            }
        }
    }
}

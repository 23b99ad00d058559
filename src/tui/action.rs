//! Actions returned by screen event handlers.

use crate::state::ActivityAction;

use super::app::Pane;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update the activity state and move focus
/// between panes.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Apply an action to the activity reducer.
    Dispatch(ActivityAction),
    /// Move keyboard focus to the given pane.
    Focus(Pane),
    /// Quit the application.
    Quit,
}

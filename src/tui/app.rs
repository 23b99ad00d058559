use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tracing::{debug, info};

use crate::config::Config;
use crate::logging;
use crate::model::CategoryTable;
use crate::state::{ActivityAction, ActivityState};

use super::action::Action;
use super::error::AppError;
use super::screens::{
    ActivityEntryState, ActivityListState, draw_activity_entry, draw_activity_list,
};

/// The panes that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    /// The activity entry form.
    Form,
    /// The list of saved activities.
    List,
}

/// Top-level application state.
pub struct App {
    state: ActivityState,
    categories: CategoryTable,
    entry: ActivityEntryState,
    list: ActivityListState,
    pane: Pane,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` with an empty activity list and the form focused.
    pub fn new(categories: CategoryTable) -> Self {
        Self {
            state: ActivityState::new(),
            entry: ActivityEntryState::new(categories.clone()),
            categories,
            list: ActivityListState::new(),
            pane: Pane::Form,
            should_quit: false,
        }
    }

    /// Loads the config, installs file logging and builds the app.
    ///
    /// Logging is skipped when the platform has no data directory.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn bootstrap() -> Result<Self, AppError> {
        let config = Config::load()?;
        match logging::default_log_path() {
            Ok(path) => logging::init(&path, &config.log_filter)?,
            Err(logging::LoggingError::NoDataDir) => {}
            Err(e) => return Err(e.into()),
        }
        info!(categories = config.categories.len(), "caltrack starting");
        Ok(Self::new(config.categories))
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        info!(activities = self.state.activities().len(), "caltrack exiting");
        Ok(())
    }

    /// Renders the form on the left and the list on the right.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [form_area, list_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(frame.area());

        draw_activity_entry(
            &self.entry,
            &self.state,
            self.pane == Pane::Form,
            frame,
            form_area,
        );
        draw_activity_list(
            &self.list,
            &self.state,
            &self.categories,
            self.pane == Pane::List,
            frame,
            list_area,
        );
    }

    /// Handles a key event: global keys first, then the focused pane.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let action = match self.pane {
            Pane::Form => self.entry.handle_key(key),
            Pane::List => self.list.handle_key(key, self.state.activities()),
        };
        self.apply(action);
    }

    /// Applies a screen action, then re-syncs the form with the active selection.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Dispatch(activity_action) => {
                let selects = matches!(activity_action, ActivityAction::SetActiveId { .. });
                self.state.apply(activity_action);
                self.list.clamp(self.state.activities().len());
                if selects {
                    self.pane = Pane::Form;
                }
            }
            Action::Focus(pane) => self.pane = pane,
            Action::Quit => self.should_quit = true,
        }

        let outcome = self.entry.sync(&self.state);
        debug!(?outcome, "form synced");
    }

    /// Returns the focused pane.
    pub fn pane(&self) -> Pane {
        self.pane
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the activity state.
    pub fn state(&self) -> &ActivityState {
        &self.state
    }

    /// Returns the entry screen state.
    pub fn entry(&self) -> &ActivityEntryState {
        &self.entry
    }

    /// Returns the list screen state.
    pub fn list(&self) -> &ActivityListState {
        &self.list
    }
}

//! Activity entry screen: the form for adding or editing one activity.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::{ActivityForm, FormMode, SyncOutcome};
use crate::model::{ActivityField, CategoryTable, ValidationError, validation_errors};
use crate::state::{ActivityAction, ActivityState};
use crate::tui::action::Action;
use crate::tui::app::Pane;
use crate::tui::widgets::form::{Form, FormField, InputKind, draw_form};
use crate::tui::widgets::format_calories;

/// Field index for the category selector.
const CATEGORY: usize = 0;
/// Field index for the activity name.
const NAME: usize = 1;
/// Field index for the calorie count.
const CALORIES: usize = 2;

/// State for the activity entry screen.
///
/// The text [`Form`] holds what the user typed; every edit is pushed through
/// [`ActivityForm::handle_change`] so the draft always mirrors the buffers.
#[derive(Debug, Clone)]
pub struct ActivityEntryState {
    form: Form,
    activity: ActivityForm,
}

impl ActivityEntryState {
    /// Creates an entry screen with an empty draft.
    pub fn new(categories: CategoryTable) -> Self {
        Self::with_form(ActivityForm::new(categories))
    }

    /// Creates an entry screen around an existing [`ActivityForm`].
    pub fn with_form(activity: ActivityForm) -> Self {
        let form = Form::new(vec![
            FormField::new("Category", true, InputKind::Select),
            FormField::new("Activity", true, InputKind::Text),
            FormField::new("Calories", true, InputKind::Numeric),
        ]);
        let mut state = Self { form, activity };
        state.load_buffers();
        state
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Left | KeyCode::Right
                if self.form.focused_input() == Some(InputKind::Select) =>
            {
                self.activity.cycle_category(key.code == KeyCode::Right);
                self.load_category();
                Action::None
            }
            KeyCode::Backspace => {
                if self.form.delete_char() {
                    self.apply_buffer(self.form.focus());
                }
                Action::None
            }
            KeyCode::Char(ch) => {
                if self.form.insert_char(ch) {
                    self.apply_buffer(self.form.focus());
                }
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Focus(Pane::List),
            _ => Action::None,
        }
    }

    /// Reloads the draft when the active selection changes.
    pub fn sync(&mut self, state: &ActivityState) -> SyncOutcome {
        let outcome = self.activity.sync(state);
        if outcome == SyncOutcome::Loaded {
            self.form.clear_errors();
            self.load_buffers();
            self.form.set_focus(NAME);
        }
        outcome
    }

    /// Returns a reference to the text form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the underlying activity form.
    pub fn activity(&self) -> &ActivityForm {
        &self.activity
    }

    /// Returns whether a new entry is being created or an existing one edited.
    pub fn mode(&self, state: &ActivityState) -> FormMode {
        self.activity.mode(state)
    }

    /// Dispatches the draft if valid; otherwise marks the failing fields.
    fn submit(&mut self) -> Action {
        self.form.clear_errors();

        let mut dispatched = None;
        let submitted = self
            .activity
            .submit(&mut |action: ActivityAction| dispatched = Some(action));

        if submitted.is_none() {
            for error in validation_errors(self.activity.draft()) {
                self.form.set_error(field_index(&error), error.to_string());
            }
            return Action::None;
        }

        self.load_buffers();
        self.form.set_focus(CATEGORY);
        dispatched.map_or(Action::None, Action::Dispatch)
    }

    /// Pushes the buffer at `index` into the draft.
    fn apply_buffer(&mut self, index: usize) {
        let field = match index {
            NAME => ActivityField::Name,
            CALORIES => ActivityField::Calories,
            _ => return,
        };
        let raw = self.form.value(index).to_string();
        self.activity.handle_change(field, &raw);
        let had_error = self
            .form
            .fields()
            .get(index)
            .is_some_and(|f| f.error.is_some());
        if had_error {
            self.refresh_error(index);
        }
    }

    /// Clears the error on `index` once the draft no longer fails for it.
    fn refresh_error(&mut self, index: usize) {
        let still_failing = validation_errors(self.activity.draft())
            .iter()
            .any(|e| field_index(e) == index);
        if !still_failing {
            self.form.clear_error(index);
        }
    }

    /// Copies the whole draft into the text buffers.
    fn load_buffers(&mut self) {
        self.load_category();
        let draft = self.activity.draft();
        let name = draft.name.clone();
        let calories = if draft.calories == 0.0 {
            String::new()
        } else {
            format_calories(draft.calories)
        };
        self.form.set_value(NAME, name);
        self.form.set_value(CALORIES, calories);
    }

    fn load_category(&mut self) {
        let id = self.activity.draft().category;
        let label = self
            .activity
            .categories()
            .get(id)
            .map_or_else(|| id.to_string(), |c| c.name.clone());
        self.form.set_value(CATEGORY, label);
    }
}

/// The form field a validation error belongs to.
fn field_index(error: &ValidationError) -> usize {
    match error {
        ValidationError::EmptyName => NAME,
        ValidationError::NonPositiveCalories => CALORIES,
    }
}

/// Renders the activity entry screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_activity_entry(
    state: &ActivityEntryState,
    app_state: &ActivityState,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let title = match state.mode(app_state) {
        FormMode::Create => " New activity ",
        FormMode::Edit(_) => " Editing activity ",
    };
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, submit_area, _, footer_area] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    let label = state.activity().submit_label().to_uppercase();
    let submit_style = if state.activity().is_valid() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let submit = Paragraph::new(Line::from(format!("[ {label} ]")))
        .alignment(Alignment::Center)
        .style(submit_style);
    frame.render_widget(submit, submit_area);

    let footer = Paragraph::new(Line::from(
        "Tab: next  \u{2190}\u{2192}: category  Enter: save  Esc: list",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

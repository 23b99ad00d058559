//! Activity list screen: table of saved activities with calorie totals.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::{Activity, CategoryTable};
use crate::state::{ActivityAction, ActivityState};
use crate::tui::action::Action;
use crate::tui::app::Pane;
use crate::tui::widgets::{draw_summary_bar, format_calories};

/// State for the activity list screen.
#[derive(Debug, Clone, Default)]
pub struct ActivityListState {
    /// Index of the highlighted row (0-based).
    selected: usize,
}

impl ActivityListState {
    /// Creates a new state with the cursor at the first row.
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, activities: &[Activity]) -> Action {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                if !activities.is_empty() {
                    self.selected = (self.selected + 1).min(activities.len() - 1);
                }
                Action::None
            }
            KeyCode::Home => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected = activities.len().saturating_sub(1);
                Action::None
            }
            KeyCode::Enter => {
                self.with_selected(activities, |a| ActivityAction::SetActiveId {
                    id: a.id.clone(),
                })
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.with_selected(activities, |a| ActivityAction::DeleteActivity {
                    id: a.id.clone(),
                })
            }
            KeyCode::Char('r') => Action::Dispatch(ActivityAction::RestartApp),
            KeyCode::Char('n') | KeyCode::Esc | KeyCode::Tab => Action::Focus(Pane::Form),
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    /// Returns the highlighted row index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Keeps the cursor inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn with_selected(
        &self,
        activities: &[Activity],
        make: impl FnOnce(&Activity) -> ActivityAction,
    ) -> Action {
        activities
            .get(self.selected)
            .map_or(Action::None, |a| Action::Dispatch(make(a)))
    }
}

/// Renders the activity list with the summary bar on top.
#[mutants::skip]
pub fn draw_activity_list(
    state: &ActivityListState,
    app_state: &ActivityState,
    categories: &CategoryTable,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let activities = app_state.activities();
    let block = Block::default()
        .title(format!(" Activities ({}) ", activities.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [summary_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_summary_bar(&app_state.summary(), frame, summary_area);

    if activities.is_empty() {
        let empty = Paragraph::new("No activities yet").alignment(Alignment::Center);
        frame.render_widget(empty, table_area);
    } else {
        let header = Row::new(vec!["", "Category", "Activity", "Calories"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = activities
            .iter()
            .enumerate()
            .map(|(i, activity)| {
                let style = if focused && i == state.selected() {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    Style::default()
                };
                let marker = if app_state.active_id() == Some(activity.id.as_str()) {
                    "\u{270e}"
                } else {
                    ""
                };
                let category = categories
                    .get(activity.category)
                    .map_or_else(|| activity.category.to_string(), |c| c.name.clone());
                Row::new(vec![
                    marker.to_string(),
                    category,
                    activity.name.clone(),
                    format_calories(activity.calories),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(2),
            Constraint::Length(10),
            Constraint::Min(10),
            Constraint::Length(9),
        ];

        let table = Table::new(rows, widths).header(header);
        frame.render_widget(table, table_area);
    }

    let footer = Paragraph::new(Line::from(
        "\u{2191}\u{2193}: navigate  Enter: edit  d: delete  r: restart  n: new  q: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

//! Text input form widget holding the raw buffers behind each field.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// What a field accepts from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Any printable character.
    Text,
    /// Digits and at most one decimal point.
    Numeric,
    /// No typing; the value is chosen with arrow keys by the owning screen.
    Select,
}

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Title shown in the field's border.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field is marked with `*`.
    pub required: bool,
    pub input: InputKind,
}

impl FormField {
    pub fn new(label: impl Into<String>, required: bool, input: InputKind) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            error: None,
            required,
            input,
        }
    }

    /// Returns `true` if `ch` may be appended to this field's current value.
    pub fn accepts(&self, ch: char) -> bool {
        match self.input {
            InputKind::Text => !ch.is_control(),
            InputKind::Numeric => ch.is_ascii_digit() || (ch == '.' && !self.value.contains('.')),
            InputKind::Select => false,
        }
    }
}

/// A multi-field form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a form. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to `index`; out-of-range indices are ignored.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Appends a character to the focused field if its input kind allows it.
    ///
    /// Returns `true` if the value changed.
    pub fn insert_char(&mut self, ch: char) -> bool {
        match self.fields.get_mut(self.focus) {
            Some(field) if field.accepts(ch) => {
                field.value.push(ch);
                true
            }
            _ => false,
        }
    }

    /// Deletes the last character of the focused field.
    ///
    /// Returns `true` if the value changed. Select fields are never edited.
    pub fn delete_char(&mut self) -> bool {
        match self.fields.get_mut(self.focus) {
            Some(field) if field.input != InputKind::Select => field.value.pop().is_some(),
            _ => false,
        }
    }

    /// Replaces the value of the field at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Sets an error message on a field by index.
    pub fn set_error(&mut self, index: usize, error: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = Some(error);
        }
    }

    /// Clears the error on the field at `index`.
    pub fn clear_error(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = None;
        }
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Returns the value at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Returns the input kind of the focused field.
    pub fn focused_input(&self) -> Option<InputKind> {
        self.fields.get(self.focus).map(|f| f.input)
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Renders a form within the given area, one three-row box per field.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let spans = match field.input {
            InputKind::Select => vec![
                Span::styled("\u{25c0} ", Style::default().fg(Color::DarkGray)),
                Span::raw(&field.value),
                Span::styled(" \u{25b6}", Style::default().fg(Color::DarkGray)),
            ],
            InputKind::Text | InputKind::Numeric => {
                let mut spans = vec![Span::raw(&field.value)];
                if is_focused {
                    spans.push(Span::styled(
                        "\u{2588}",
                        Style::default().add_modifier(Modifier::SLOW_BLINK),
                    ));
                }
                spans
            }
        };

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            // Overlaps the bottom border of the field's box.
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + row_height.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}

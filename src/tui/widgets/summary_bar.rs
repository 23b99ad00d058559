//! Summary bar widget: one-line calorie totals.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::CalorieSummary;

/// Formats a calorie amount without a trailing `.0` for whole numbers.
pub fn format_calories(calories: f64) -> String {
    format!("{calories}")
}

/// Renders `Consumed: N  Burned: N  Net: N`.
///
/// Net is green when at or below zero and yellow when positive.
#[mutants::skip]
pub fn draw_summary_bar(summary: &CalorieSummary, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let net_style = if summary.net > 0.0 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    };

    let spans = vec![
        Span::styled(format!("Consumed: {}", format_calories(summary.consumed)), cyan),
        Span::styled("  ", cyan),
        Span::styled(format!("Burned: {}", format_calories(summary.burned)), cyan),
        Span::styled("  ", cyan),
        Span::styled(format!("Net: {}", format_calories(summary.net)), net_style),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

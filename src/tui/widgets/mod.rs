//! Reusable TUI widgets.

pub mod form;
pub mod summary_bar;

pub use form::{Form, FormField, InputKind, draw_form};
pub use summary_bar::{draw_summary_bar, format_calories};

//! TUI screen implementations.

pub mod activity_entry;
pub mod activity_list;

pub use activity_entry::{ActivityEntryState, draw_activity_entry};
pub use activity_list::{ActivityListState, draw_activity_list};

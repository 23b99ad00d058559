//! The activity list owner: reducer, actions and totals.

mod action;
mod reducer;
mod summary;

pub use action::ActivityAction;
pub use reducer::ActivityState;
pub use summary::CalorieSummary;

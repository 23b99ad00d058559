#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Terminal calorie tracker: log food and exercise, edit entries, watch the net total.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod state;
pub mod tui;

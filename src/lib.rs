#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal tally list: `(label, count)` entries built on an Add screen
//! and managed on a Home list.

pub mod config;
pub mod logging;
pub mod model;
pub mod tui;

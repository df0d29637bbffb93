//! Three-dots loading indicator for iced
//!
//! One dot at a time grows and shifts color, then hands focus to its
//! neighbour, looping while the indicator is visible.

pub mod features;
pub mod ui;

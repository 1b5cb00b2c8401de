//! Display formatting for terminal output
//!
//! Provides utilities for formatting budget heads for terminal display.

pub mod budget_head;

pub use budget_head::{format_budget_head_details, format_budget_head_table, format_style_legend};

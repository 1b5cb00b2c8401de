//! Configuration module for budget-heads
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetHeadPaths;
pub use settings::{IdStrategy, Settings};

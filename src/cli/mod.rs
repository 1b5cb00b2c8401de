//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget_head;
pub mod shell;

pub use budget_head::{handle_budget_head_command, BudgetHeadCommands, CliContext};
pub use shell::{execute_line, run_shell, Flow};

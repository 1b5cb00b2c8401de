//! Export module for budget-heads
//!
//! Writes the current registry contents in several formats:
//! - JSON: machine-readable snapshot with schema version
//! - YAML: human-readable snapshot
//! - CSV: one row per budget head (spreadsheet-compatible)
//!
//! Exports go to any writer (usually stdout); nothing is read back.

pub mod csv;
pub mod json;
pub mod yaml;

use serde::{Deserialize, Serialize};

pub use self::csv::export_csv;
pub use json::{export_json, RegistrySnapshot, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

/// Output format for listing budget heads
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal table
    #[default]
    Table,
    /// JSON snapshot
    Json,
    /// YAML snapshot
    Yaml,
    /// CSV rows
    Csv,
}

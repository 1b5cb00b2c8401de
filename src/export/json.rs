//! JSON Export functionality
//!
//! Exports the registry to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetHeadError, BudgetHeadResult};
use crate::models::BudgetHead;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Point-in-time copy of the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All budget heads, in registry order
    pub budget_heads: Vec<BudgetHead>,

    /// Export metadata
    pub metadata: SnapshotMetadata,
}

/// Counts for quick reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Total number of budget heads
    pub total_count: usize,

    /// Number of active budget heads
    pub active_count: usize,
}

impl RegistrySnapshot {
    /// Capture the given budget heads
    pub fn from_heads(heads: &[BudgetHead]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            budget_heads: heads.to_vec(),
            metadata: SnapshotMetadata {
                total_count: heads.len(),
                active_count: heads.iter().filter(|h| h.is_active).count(),
            },
        }
    }
}

/// Export budget heads to pretty-printed JSON
///
/// Serialization failures are `Export` errors; failures of the writer
/// itself stay `Io`.
pub fn export_json<W: Write>(heads: &[BudgetHead], writer: &mut W) -> BudgetHeadResult<()> {
    let snapshot = RegistrySnapshot::from_heads(heads);

    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| BudgetHeadError::Export(e.to_string()))?;
    writeln!(writer, "{}", json)?;

    Ok(())
}

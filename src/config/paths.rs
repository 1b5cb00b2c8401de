//! Path management for budget-heads
//!
//! Only the settings file lives on disk; budget heads themselves are never
//! persisted.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_HEADS_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (e.g. `~/.config/budget-heads` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetHeadError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "BUDGET_HEADS_CONFIG_DIR";

/// Manages all paths used by budget-heads
#[derive(Debug, Clone)]
pub struct BudgetHeadPaths {
    base_dir: PathBuf,
}

impl BudgetHeadPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetHeadError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetHeadError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            BudgetHeadError::Io(format!("Failed to create config directory: {}", e))
        })
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetHeadError> {
    ProjectDirs::from("", "", "budget-heads")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BudgetHeadError::Config("Could not determine a home directory".into()))
}

//! User settings for budget-heads
//!
//! Manages preferences such as the id strategy, whether the default records
//! are seeded, and the code uniqueness policy.

use serde::{Deserialize, Serialize};

use super::paths::BudgetHeadPaths;
use crate::error::BudgetHeadError;
use crate::export::OutputFormat;

/// How new budget head ids are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Monotonic counter ("6", "7", ...)
    #[default]
    Sequential,
    /// Random v4 UUIDs
    Uuid,
}

/// User settings for budget-heads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How new ids are generated
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Start every registry with the default records
    #[serde(default = "default_true")]
    pub seed_defaults: bool,

    /// Reject a code already used by another budget head
    #[serde(default)]
    pub enforce_unique_codes: bool,

    /// Output format used by `list` when none is given
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "budget_heads=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            id_strategy: IdStrategy::default(),
            seed_defaults: default_true(),
            enforce_unique_codes: false,
            default_format: OutputFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetHeadPaths) -> Result<Self, BudgetHeadError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetHeadError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetHeadError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetHeadPaths) -> Result<(), BudgetHeadError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetHeadError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetHeadError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.id_strategy, IdStrategy::Sequential);
        assert!(settings.seed_defaults);
        assert!(!settings.enforce_unique_codes);
        assert_eq!(settings.default_format, OutputFormat::Table);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetHeadPaths::with_base_dir(temp_dir.path().join("absent"));

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(settings.seed_defaults);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetHeadPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.id_strategy = IdStrategy::Uuid;
        settings.enforce_unique_codes = true;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.id_strategy, IdStrategy::Uuid);
        assert!(loaded.enforce_unique_codes);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetHeadPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"seed_defaults": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.seed_defaults);
        assert_eq!(loaded.log_filter, "budget_heads=warn");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetHeadPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(BudgetHeadError::Config(_))));
    }
}

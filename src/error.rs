//! Custom error types for budget-heads
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::BudgetHeadId;

/// The main error type for budget head operations
#[derive(Error, Debug)]
pub enum BudgetHeadError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Missing required fields or unparseable values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A code shared by several budget heads was used as an identifier
    #[error("Budget head code {code} is ambiguous, matching ids: {ids}")]
    AmbiguousCode { code: String, ids: String },

    /// Editing session misuse (e.g. submitting a closed form)
    #[error("Session error: {0}")]
    Session(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetHeadError {
    /// Create a "not found" error for budget heads
    pub fn budget_head_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget head",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for a budget head code
    pub fn duplicate_code(code: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Budget head code",
            identifier: code.into(),
        }
    }

    /// Create an error for a code that matches more than one budget head
    pub fn ambiguous_code<'a>(
        code: impl Into<String>,
        ids: impl IntoIterator<Item = &'a BudgetHeadId>,
    ) -> Self {
        let ids: Vec<&str> = ids.into_iter().map(BudgetHeadId::as_str).collect();
        Self::AmbiguousCode {
            code: code.into(),
            ids: ids.join(", "),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetHeadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetHeadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget head operations
pub type BudgetHeadResult<T> = Result<T, BudgetHeadError>;

//! Typed commands accepted by the registry
//!
//! Form data is turned into a validated [`BudgetHeadInput`] before it reaches
//! the registry, so the registry never sees a blank field.

use super::budget_head::{BudgetHeadType, BudgetHeadValidationError};
use super::ids::BudgetHeadId;

/// Validated editable fields of a budget head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetHeadInput {
    pub(crate) name: String,
    pub(crate) code: String,
    pub(crate) head_type: BudgetHeadType,
    pub(crate) description: String,
}

impl BudgetHeadInput {
    /// Build input, trimming text fields and rejecting blank ones
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        head_type: BudgetHeadType,
        description: impl Into<String>,
    ) -> Result<Self, BudgetHeadValidationError> {
        let name = required(name.into(), BudgetHeadValidationError::EmptyName)?;
        let code = required(code.into(), BudgetHeadValidationError::EmptyCode)?;
        let description = required(
            description.into(),
            BudgetHeadValidationError::EmptyDescription,
        )?;

        Ok(Self {
            name,
            code,
            head_type,
            description,
        })
    }

    /// Build input from a raw type string
    pub fn parse(
        name: impl Into<String>,
        code: impl Into<String>,
        head_type: &str,
        description: impl Into<String>,
    ) -> Result<Self, BudgetHeadValidationError> {
        if head_type.trim().is_empty() {
            return Err(BudgetHeadValidationError::MissingType);
        }
        let head_type = head_type.parse()?;
        Self::new(name, code, head_type, description)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn head_type(&self) -> BudgetHeadType {
        self.head_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

fn required(
    value: String,
    err: BudgetHeadValidationError,
) -> Result<String, BudgetHeadValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(err);
    }
    Ok(trimmed.to_string())
}

/// Create a new budget head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBudgetHead {
    pub input: BudgetHeadInput,
}

impl CreateBudgetHead {
    pub fn new(input: BudgetHeadInput) -> Self {
        Self { input }
    }
}

/// Replace the editable fields of an existing budget head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBudgetHead {
    pub id: BudgetHeadId,
    pub input: BudgetHeadInput,
}

impl UpdateBudgetHead {
    pub fn new(id: impl Into<BudgetHeadId>, input: BudgetHeadInput) -> Self {
        Self {
            id: id.into(),
            input,
        }
    }
}

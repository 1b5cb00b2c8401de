//! Budget head form values
//!
//! The form surface hands back a map of field name to raw text. Converting it
//! into a [`BudgetHeadInput`] is where required-field presence and the type
//! name are checked.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetHeadError;
use crate::models::{BudgetHead, BudgetHeadInput, BudgetHeadValidationError};

/// Which field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Code,
    Type,
    Description,
}

impl FormField {
    /// All fields in form order
    pub fn all() -> &'static [Self] {
        &[Self::Name, Self::Code, Self::Type, Self::Description]
    }

    /// Field name as used in the submitted map
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Code => "code",
            Self::Type => "type",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = BudgetHeadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| {
                BudgetHeadError::Validation(format!(
                    "Unknown field '{}' (expected name, code, type or description)",
                    key
                ))
            })
    }
}

/// Raw field values as entered in the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<FormField, String>,
}

impl FormValues {
    /// Empty form, as shown when creating
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled from an existing budget head, as shown when editing
    pub fn from_head(head: &BudgetHead) -> Self {
        let mut values = Self::new();
        values.set(FormField::Name, head.name.clone());
        values.set(FormField::Code, head.code.clone());
        values.set(FormField::Type, head.head_type.name());
        values.set(FormField::Description, head.description.clone());
        values
    }

    /// Build from `(field name, value)` pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self, BudgetHeadError>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut values = Self::new();
        for (key, value) in pairs {
            let field = key.as_ref().parse::<FormField>()?;
            values.set(field, value);
        }
        Ok(values)
    }

    /// Set a field's value
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Get a field's value ("" when never set)
    pub fn get(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }
}

impl TryFrom<&FormValues> for BudgetHeadInput {
    type Error = BudgetHeadValidationError;

    fn try_from(values: &FormValues) -> Result<Self, Self::Error> {
        BudgetHeadInput::parse(
            values.get(FormField::Name),
            values.get(FormField::Code),
            values.get(FormField::Type),
            values.get(FormField::Description),
        )
    }
}

//! Budget head model
//!
//! A budget head is a named category used to classify financial transactions
//! (maintenance, corpus fund, capital expenditure, ...). Each head has a type
//! that also decides how it is styled when listed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::command::BudgetHeadInput;
use super::ids::BudgetHeadId;

/// Classification of a budget head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetHeadType {
    /// Day-to-day running costs
    Operational,
    /// Long-lived investments and improvements
    Capital,
    /// Money set aside for the future
    Reserve,
}

impl BudgetHeadType {
    /// Get all types in display order
    pub fn all() -> &'static [Self] {
        &[Self::Operational, Self::Capital, Self::Reserve]
    }

    /// Get the name for this type
    pub fn name(&self) -> &'static str {
        match self {
            Self::Operational => "Operational",
            Self::Capital => "Capital",
            Self::Reserve => "Reserve",
        }
    }

    /// Visual classification used when this type is displayed
    pub fn display_style(&self) -> DisplayStyle {
        match self {
            Self::Operational => DisplayStyle::Info,
            Self::Capital => DisplayStyle::Accent,
            Self::Reserve => DisplayStyle::Warning,
        }
    }
}

impl fmt::Display for BudgetHeadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BudgetHeadType {
    type Err = BudgetHeadValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| BudgetHeadValidationError::UnknownType(trimmed.to_string()))
    }
}

/// Visual classification tag for a budget head type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    Info,
    Accent,
    Warning,
    /// Fallback for values that are not a known type
    Neutral,
}

impl DisplayStyle {
    /// Stable tag string for this style
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Accent => "accent",
            Self::Warning => "warning",
            Self::Neutral => "neutral",
        }
    }

    /// Terminal color used for badges of this style
    pub fn color(&self) -> &'static str {
        match self {
            Self::Info => "blue",
            Self::Accent => "purple",
            Self::Warning => "yellow",
            Self::Neutral => "gray",
        }
    }
}

impl fmt::Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Map a raw type string to its display style
///
/// Total over all input: anything that is not a known type maps to
/// [`DisplayStyle::Neutral`].
pub fn type_display_style(raw: &str) -> DisplayStyle {
    raw.parse::<BudgetHeadType>()
        .map(|t| t.display_style())
        .unwrap_or(DisplayStyle::Neutral)
}

/// A budget head record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetHead {
    /// Unique identifier, never reassigned
    pub id: BudgetHeadId,

    /// Display name
    pub name: String,

    /// Short identifier (not required to be unique)
    pub code: String,

    /// Classification
    #[serde(rename = "type")]
    pub head_type: BudgetHeadType,

    /// Free-text description
    pub description: String,

    /// Whether the head is currently in use
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl BudgetHead {
    /// Create a new, active budget head from validated input
    pub fn new(id: BudgetHeadId, input: BudgetHeadInput) -> Self {
        Self {
            id,
            name: input.name,
            code: input.code,
            head_type: input.head_type,
            description: input.description,
            is_active: true,
        }
    }

    /// Replace the editable fields, keeping id and active flag
    pub fn apply(&mut self, input: BudgetHeadInput) {
        self.name = input.name;
        self.code = input.code;
        self.head_type = input.head_type;
        self.description = input.description;
    }

    /// Flip the active flag, returning the new value
    pub fn toggle_active(&mut self) -> bool {
        self.is_active = !self.is_active;
        self.is_active
    }

    /// Current field values as form input
    pub fn to_input(&self) -> BudgetHeadInput {
        BudgetHeadInput {
            name: self.name.clone(),
            code: self.code.clone(),
            head_type: self.head_type,
            description: self.description.clone(),
        }
    }

    /// Display style for this head's type
    pub fn display_style(&self) -> DisplayStyle {
        self.head_type.display_style()
    }

    /// Human-readable status
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

impl fmt::Display for BudgetHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Validation errors for budget head input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetHeadValidationError {
    EmptyName,
    EmptyCode,
    EmptyDescription,
    MissingType,
    UnknownType(String),
}

impl fmt::Display for BudgetHeadValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Budget head name is required"),
            Self::EmptyCode => write!(f, "Budget head code is required"),
            Self::EmptyDescription => write!(f, "Budget head description is required"),
            Self::MissingType => write!(f, "Budget head type is required"),
            Self::UnknownType(raw) => write!(
                f,
                "Unknown budget head type '{}' (expected Operational, Capital or Reserve)",
                raw
            ),
        }
    }
}

impl std::error::Error for BudgetHeadValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BudgetHead {
        let input = BudgetHeadInput::new(
            "Maintenance",
            "MAINT",
            BudgetHeadType::Operational,
            "Regular upkeep",
        )
        .unwrap();
        BudgetHead::new(BudgetHeadId::new("1"), input)
    }

    #[test]
    fn test_new_head_is_active() {
        let head = sample();
        assert!(head.is_active);
        assert_eq!(head.id.as_str(), "1");
        assert_eq!(head.to_string(), "Maintenance (MAINT)");
    }

    #[test]
    fn test_type_parse_is_case_insensitive() {
        assert_eq!("capital".parse::<BudgetHeadType>(), Ok(BudgetHeadType::Capital));
        assert_eq!(" Reserve ".parse::<BudgetHeadType>(), Ok(BudgetHeadType::Reserve));
        assert_eq!(
            "Sinking".parse::<BudgetHeadType>(),
            Err(BudgetHeadValidationError::UnknownType("Sinking".into()))
        );
    }

    #[test]
    fn test_display_styles_are_distinct() {
        let styles: Vec<_> = BudgetHeadType::all()
            .iter()
            .map(|t| t.display_style())
            .collect();
        assert_eq!(styles.len(), 3);
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
        assert_ne!(styles[0], styles[2]);
        assert!(!styles.contains(&DisplayStyle::Neutral));
    }

    #[test]
    fn test_type_display_style_fallback() {
        assert_eq!(type_display_style("Operational"), DisplayStyle::Info);
        assert_eq!(type_display_style("Capital"), DisplayStyle::Accent);
        assert_eq!(type_display_style("Reserve"), DisplayStyle::Warning);
        assert_eq!(type_display_style("Other"), DisplayStyle::Neutral);
        assert_eq!(type_display_style(""), DisplayStyle::Neutral);
        assert_eq!(type_display_style("Other"), type_display_style("Other"));
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut head = sample();
        assert!(!head.toggle_active());
        assert!(head.toggle_active());
        assert_eq!(head.status_label(), "Active");
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut head = sample();
        head.toggle_active();
        let input = BudgetHeadInput::new(
            "Repairs",
            "REP",
            BudgetHeadType::Capital,
            "Structural repairs",
        )
        .unwrap();
        head.apply(input);
        assert_eq!(head.id.as_str(), "1");
        assert!(!head.is_active);
        assert_eq!(head.name, "Repairs");
        assert_eq!(head.head_type, BudgetHeadType::Capital);
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let head = sample();
        let json = serde_json::to_value(&head).unwrap();
        assert_eq!(json["isActive"], true);
        assert_eq!(json["type"], "Operational");
        let back: BudgetHead = serde_json::from_value(json).unwrap();
        assert_eq!(back, head);
    }
}

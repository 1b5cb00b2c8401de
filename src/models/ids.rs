//! Budget head identifiers and the generators that mint them
//!
//! Identifiers are opaque strings. The seeded records use short numeric ids
//! ("1" to "5"), so the default generator is a monotonic counter; a UUID
//! generator is available when ids must not be guessable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque, string-typed identifier of a budget head
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetHeadId(String);

impl BudgetHeadId {
    /// Wrap an existing identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BudgetHeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BudgetHeadId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BudgetHeadId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for BudgetHeadId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

/// Source of fresh budget head identifiers
///
/// Injected into the registry so tests can predict the ids it hands out.
pub trait IdGenerator {
    /// Produce the next identifier
    fn next_id(&mut self) -> BudgetHeadId;
}

/// Monotonic counter producing "1", "2", "3", ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    /// Start counting at `first`
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> BudgetHeadId {
        let id = self.next;
        self.next += 1;
        BudgetHeadId(id.to_string())
    }
}

/// Random v4 UUID identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> BudgetHeadId {
        BudgetHeadId(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIdGenerator::starting_at(6);
        assert_eq!(ids.next_id().as_str(), "6");
        assert_eq!(ids.next_id().as_str(), "7");
        assert_eq!(ids.next_id().as_str(), "8");
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let mut ids = UuidIdGenerator;
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
        assert!(Uuid::parse_str(first.as_str()).is_ok());
    }

    #[test]
    fn test_id_display_and_parse() {
        let id: BudgetHeadId = " 42 ".parse().unwrap();
        assert_eq!(id.to_string(), "42");
        assert_eq!(id, BudgetHeadId::from("42"));
    }

    #[test]
    fn test_id_serialization() {
        let id = BudgetHeadId::new("3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"3\"");
        let deserialized: BudgetHeadId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

//! In-memory budget head registry
//!
//! Holds the ordered list of budget heads and applies the raw mutations.
//! Nothing here is written to disk; the registry lives as long as its owner.
//!
//! Lookups by an unknown id are silent no-ops at this layer: the mutating
//! methods return `None` and leave the list untouched. The service layer
//! decides whether that is an error.

pub mod seed;

use std::fmt;

use crate::config::settings::{IdStrategy, Settings};
use crate::error::{BudgetHeadError, BudgetHeadResult};
use crate::models::{
    BudgetHead, BudgetHeadId, CreateBudgetHead, IdGenerator, SequentialIdGenerator,
    UpdateBudgetHead, UuidIdGenerator,
};

pub use seed::{default_budget_heads, DEFAULT_HEAD_COUNT};

/// Ordered collection of budget heads with unique ids
pub struct BudgetHeadRegistry {
    items: Vec<BudgetHead>,
    ids: Box<dyn IdGenerator>,
}

impl BudgetHeadRegistry {
    /// Create an empty registry
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            items: Vec::new(),
            ids,
        }
    }

    /// Create a registry from existing records
    ///
    /// Fails if two records share an id.
    pub fn with_items(
        items: Vec<BudgetHead>,
        ids: Box<dyn IdGenerator>,
    ) -> BudgetHeadResult<Self> {
        for (i, head) in items.iter().enumerate() {
            if items[..i].iter().any(|other| other.id == head.id) {
                return Err(BudgetHeadError::Duplicate {
                    entity_type: "Budget head id",
                    identifier: head.id.to_string(),
                });
            }
        }
        Ok(Self { items, ids })
    }

    /// Create a registry holding the default records, numbering new heads
    /// after them
    pub fn seeded() -> Self {
        let ids = SequentialIdGenerator::starting_at(DEFAULT_HEAD_COUNT as u64 + 1);
        Self {
            items: default_budget_heads(),
            ids: Box::new(ids),
        }
    }

    /// Build a registry as described by the user's settings
    pub fn from_settings(settings: &Settings) -> Self {
        let ids: Box<dyn IdGenerator> = match settings.id_strategy {
            IdStrategy::Sequential => {
                let first = if settings.seed_defaults {
                    DEFAULT_HEAD_COUNT as u64 + 1
                } else {
                    1
                };
                Box::new(SequentialIdGenerator::starting_at(first))
            }
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
        };

        let items = if settings.seed_defaults {
            default_budget_heads()
        } else {
            Vec::new()
        };

        Self { items, ids }
    }

    // Queries

    /// Number of budget heads
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry holds no budget heads
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate budget heads in order
    pub fn iter(&self) -> impl Iterator<Item = &BudgetHead> {
        self.items.iter()
    }

    /// All budget heads in order
    pub fn as_slice(&self) -> &[BudgetHead] {
        &self.items
    }

    /// Get a budget head by id
    pub fn get(&self, id: &BudgetHeadId) -> Option<&BudgetHead> {
        self.items.iter().find(|h| &h.id == id)
    }

    /// Whether a budget head with this id exists
    pub fn contains(&self, id: &BudgetHeadId) -> bool {
        self.get(id).is_some()
    }

    /// Position of a budget head in the list
    pub fn position(&self, id: &BudgetHeadId) -> Option<usize> {
        self.items.iter().position(|h| &h.id == id)
    }

    /// Budget heads with this code (case-insensitive), in order
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a BudgetHead> + 'a {
        let code = code.trim();
        self.items
            .iter()
            .filter(move |h| h.code.eq_ignore_ascii_case(code))
    }

    // Mutations

    /// Append a new, active budget head
    pub fn create(&mut self, cmd: CreateBudgetHead) -> &BudgetHead {
        let id = self.fresh_id();
        let index = self.items.len();
        self.items.push(BudgetHead::new(id, cmd.input));
        &self.items[index]
    }

    /// Replace the editable fields of a budget head in place
    ///
    /// Id, active flag and position are kept. Unknown ids are ignored.
    pub fn update(&mut self, cmd: UpdateBudgetHead) -> Option<&BudgetHead> {
        let index = self.position(&cmd.id)?;
        let head = &mut self.items[index];
        head.apply(cmd.input);
        Some(&*head)
    }

    /// Remove a budget head. Unknown ids are ignored.
    pub fn delete(&mut self, id: &BudgetHeadId) -> Option<BudgetHead> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Flip the active flag of a budget head. Unknown ids are ignored.
    pub fn toggle_active(&mut self, id: &BudgetHeadId) -> Option<&BudgetHead> {
        let index = self.position(id)?;
        let head = &mut self.items[index];
        head.toggle_active();
        Some(&*head)
    }

    fn fresh_id(&mut self) -> BudgetHeadId {
        loop {
            let id = self.ids.next_id();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl Default for BudgetHeadRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl fmt::Debug for BudgetHeadRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BudgetHeadRegistry")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

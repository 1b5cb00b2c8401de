//! Core data models for budget-heads
//!
//! The budget head entity, its identifiers, and the typed commands that
//! create or replace it.

pub mod budget_head;
pub mod command;
pub mod ids;

pub use budget_head::{
    type_display_style, BudgetHead, BudgetHeadType, BudgetHeadValidationError, DisplayStyle,
};
pub use command::{BudgetHeadInput, CreateBudgetHead, UpdateBudgetHead};
pub use ids::{BudgetHeadId, IdGenerator, SequentialIdGenerator, UuidIdGenerator};

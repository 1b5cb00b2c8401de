//! Service layer for budget-heads
//!
//! The service layer provides business logic on top of the registry,
//! handling policy checks, error reporting, and notifications.

pub mod budget_head;

pub use budget_head::BudgetHeadService;

//! budget-heads - in-memory budget head registry
//!
//! Budget heads are the categories a society or small organisation books its
//! expenses against (maintenance, corpus fund, capital expenditure, ...).
//! This crate keeps them in an ordered in-memory registry and exposes
//! create, update, delete and toggle-active operations, an editing session
//! that mirrors a create/edit form, and a CLI with an interactive shell.
//! Records are never written to disk.
//!
//! # Architecture
//!
//! - `models`: budget head entity, types, ids and typed commands
//! - `registry`: ordered in-memory store and default records
//! - `services`: policy checks, not-found errors and notifications
//! - `session`: form session, form values and notifications
//! - `display` / `export`: table, detail and snapshot output
//! - `cli`: clap commands and the interactive shell
//! - `config` / `logging` / `error`: settings, tracing setup, error types
//!
//! # Example
//!
//! ```rust
//! use budget_heads::models::{BudgetHeadInput, BudgetHeadType, CreateBudgetHead};
//! use budget_heads::registry::BudgetHeadRegistry;
//! use budget_heads::services::BudgetHeadService;
//! use budget_heads::session::NotificationLog;
//!
//! let mut registry = BudgetHeadRegistry::seeded();
//! let mut notifications = NotificationLog::new();
//! let mut service = BudgetHeadService::new(&mut registry, &mut notifications);
//!
//! let input = BudgetHeadInput::new(
//!     "Insurance",
//!     "INS",
//!     BudgetHeadType::Operational,
//!     "Insurance premiums",
//! )?;
//! let head = service.create(CreateBudgetHead::new(input))?;
//! assert!(head.is_active);
//! assert_eq!(service.list().len(), 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod registry;
pub mod services;
pub mod session;

pub use error::{BudgetHeadError, BudgetHeadResult};

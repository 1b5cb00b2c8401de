//! Budget head service
//!
//! Business logic on top of the registry: code uniqueness policy, not-found
//! errors for unknown ids, tracing, and success notifications.

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{BudgetHeadError, BudgetHeadResult};
use crate::models::{BudgetHead, BudgetHeadId, CreateBudgetHead, UpdateBudgetHead};
use crate::registry::BudgetHeadRegistry;
use crate::session::notification::{Notification, Notifier};

/// Service for budget head management
pub struct BudgetHeadService<'a> {
    registry: &'a mut BudgetHeadRegistry,
    notifier: &'a mut dyn Notifier,
    enforce_unique_codes: bool,
}

impl<'a> BudgetHeadService<'a> {
    /// Create a new budget head service
    pub fn new(registry: &'a mut BudgetHeadRegistry, notifier: &'a mut dyn Notifier) -> Self {
        Self {
            registry,
            notifier,
            enforce_unique_codes: false,
        }
    }

    /// Create a service honouring the user's settings
    pub fn with_settings(
        registry: &'a mut BudgetHeadRegistry,
        notifier: &'a mut dyn Notifier,
        settings: &Settings,
    ) -> Self {
        Self::new(registry, notifier).enforce_unique_codes(settings.enforce_unique_codes)
    }

    /// Reject codes already used by another budget head
    pub fn enforce_unique_codes(mut self, enforce: bool) -> Self {
        self.enforce_unique_codes = enforce;
        self
    }

    // === Queries ===

    /// List all budget heads in order
    pub fn list(&self) -> &[BudgetHead] {
        self.registry.as_slice()
    }

    /// Get a budget head by ID
    pub fn get(&self, id: &BudgetHeadId) -> Option<&BudgetHead> {
        self.registry.get(id)
    }

    /// Resolve an ID or code to a budget head ID
    ///
    /// An exact ID wins. A code must match exactly one budget head; codes
    /// shared by several heads are rejected with the matching ids.
    pub fn resolve(&self, identifier: &str) -> BudgetHeadResult<BudgetHeadId> {
        let id = BudgetHeadId::new(identifier.trim());
        if self.registry.contains(&id) {
            return Ok(id);
        }

        let matches: Vec<&BudgetHeadId> =
            self.registry.with_code(identifier).map(|h| &h.id).collect();
        match matches.as_slice() {
            [] => Err(BudgetHeadError::budget_head_not_found(identifier.trim())),
            [only] => Ok((*only).clone()),
            _ => Err(BudgetHeadError::ambiguous_code(
                identifier.trim(),
                matches.iter().copied(),
            )),
        }
    }

    /// Get a budget head by ID, failing if it doesn't exist
    pub fn require(&self, id: &BudgetHeadId) -> BudgetHeadResult<&BudgetHead> {
        self.registry
            .get(id)
            .ok_or_else(|| BudgetHeadError::budget_head_not_found(id.as_str()))
    }

    // === Mutations ===

    /// Create a new budget head
    pub fn create(&mut self, cmd: CreateBudgetHead) -> BudgetHeadResult<BudgetHead> {
        self.check_code(cmd.input.code(), None)?;

        let head = self.registry.create(cmd).clone();
        info!(id = %head.id, code = %head.code, "budget head created");

        self.notifier
            .notify(Notification::success(format!("Budget head \"{}\" created", head.name)));
        Ok(head)
    }

    /// Replace the editable fields of a budget head
    pub fn update(&mut self, cmd: UpdateBudgetHead) -> BudgetHeadResult<BudgetHead> {
        let id = cmd.id.clone();
        self.require(&id)?;
        self.check_code(cmd.input.code(), Some(&id))?;

        let head = self
            .registry
            .update(cmd)
            .cloned()
            .ok_or_else(|| BudgetHeadError::budget_head_not_found(id.as_str()))?;
        info!(id = %head.id, code = %head.code, "budget head updated");

        self.notifier
            .notify(Notification::success(format!("Budget head \"{}\" updated", head.name)));
        Ok(head)
    }

    /// Delete a budget head
    pub fn delete(&mut self, id: &BudgetHeadId) -> BudgetHeadResult<BudgetHead> {
        let head = self.registry.delete(id).ok_or_else(|| {
            debug!(id = %id, "delete of unknown budget head");
            BudgetHeadError::budget_head_not_found(id.as_str())
        })?;
        info!(id = %head.id, code = %head.code, "budget head deleted");

        self.notifier
            .notify(Notification::success(format!("Budget head \"{}\" deleted", head.name)));
        Ok(head)
    }

    /// Flip a budget head between active and inactive
    pub fn toggle_active(&mut self, id: &BudgetHeadId) -> BudgetHeadResult<BudgetHead> {
        let head = self.registry.toggle_active(id).cloned().ok_or_else(|| {
            debug!(id = %id, "toggle of unknown budget head");
            BudgetHeadError::budget_head_not_found(id.as_str())
        })?;
        info!(id = %head.id, active = head.is_active, "budget head toggled");

        let verb = if head.is_active {
            "activated"
        } else {
            "deactivated"
        };
        self.notifier
            .notify(Notification::success(format!("Budget head \"{}\" {}", head.name, verb)));
        Ok(head)
    }

    /// Report a failed operation through the notification surface
    pub fn report_error(&mut self, err: &BudgetHeadError) {
        self.notifier.notify(Notification::error(err.to_string()));
    }

    fn check_code(&self, code: &str, editing: Option<&BudgetHeadId>) -> BudgetHeadResult<()> {
        if !self.enforce_unique_codes {
            return Ok(());
        }

        let taken = self
            .registry
            .iter()
            .any(|h| h.code.eq_ignore_ascii_case(code) && Some(&h.id) != editing);
        if taken {
            return Err(BudgetHeadError::duplicate_code(code));
        }
        Ok(())
    }
}

//! Editing session
//!
//! Tracks whether the form is open and, if so, whether it creates a new
//! budget head or edits an existing one. When editing, the session holds a
//! snapshot of the record taken when the form was opened; later registry
//! changes don't alter what the form shows.

use tracing::{debug, warn};

use super::form::{FormField, FormValues};
use crate::error::{BudgetHeadError, BudgetHeadResult};
use crate::models::{
    BudgetHead, BudgetHeadId, BudgetHeadInput, CreateBudgetHead, UpdateBudgetHead,
};
use crate::services::BudgetHeadService;

/// What the open form will do on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Form closed
    Idle,
    /// Form open for a new budget head
    Creating,
    /// Form open for an existing budget head
    Editing,
}

/// State of the budget head form
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    /// Whether the form is showing
    open: bool,

    /// Snapshot of the budget head being edited (None when creating)
    editing_target: Option<BudgetHead>,

    /// Current field values
    values: FormValues,

    /// Error message from the last rejected submit
    error_message: Option<String>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a blank form for a new budget head
    pub fn open_create(&mut self) {
        debug!("opening create form");
        self.open = true;
        self.editing_target = None;
        self.values = FormValues::new();
        self.error_message = None;
    }

    /// Open the form prefilled with an existing budget head
    pub fn open_edit(
        &mut self,
        service: &BudgetHeadService<'_>,
        id: &BudgetHeadId,
    ) -> BudgetHeadResult<()> {
        let snapshot = service.require(id)?.clone();
        debug!(id = %id, "opening edit form");

        self.values = FormValues::from_head(&snapshot);
        self.editing_target = Some(snapshot);
        self.open = true;
        self.error_message = None;
        Ok(())
    }

    /// Whether the form is showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// What a submit would do right now
    pub fn mode(&self) -> SessionMode {
        match (self.open, &self.editing_target) {
            (false, _) => SessionMode::Idle,
            (true, None) => SessionMode::Creating,
            (true, Some(_)) => SessionMode::Editing,
        }
    }

    /// Snapshot of the budget head being edited
    pub fn editing_target(&self) -> Option<&BudgetHead> {
        self.editing_target.as_ref()
    }

    /// Current field values
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Error message from the last rejected submit
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Change one field of the open form
    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> BudgetHeadResult<()> {
        self.ensure_open()?;
        self.values.set(field, value);
        self.error_message = None;
        Ok(())
    }

    /// Submit the current field values
    pub fn submit(
        &mut self,
        service: &mut BudgetHeadService<'_>,
    ) -> BudgetHeadResult<BudgetHead> {
        let values = self.values.clone();
        self.submit_values(service, values)
    }

    /// Submit the given field values
    ///
    /// Creates when no editing target is set, otherwise updates the target.
    /// On success the form closes. A rejected input keeps the form open with
    /// an error message; a target that has disappeared closes it.
    pub fn submit_values(
        &mut self,
        service: &mut BudgetHeadService<'_>,
        values: FormValues,
    ) -> BudgetHeadResult<BudgetHead> {
        self.ensure_open()?;
        self.values = values;

        let result = BudgetHeadInput::try_from(&self.values)
            .map_err(|e| BudgetHeadError::Validation(e.to_string()))
            .and_then(|input| match &self.editing_target {
                None => service.create(CreateBudgetHead::new(input)),
                Some(target) => service.update(UpdateBudgetHead::new(target.id.clone(), input)),
            });

        match result {
            Ok(head) => {
                self.close();
                Ok(head)
            }
            Err(err) => {
                warn!(error = %err, "budget head form rejected");
                service.report_error(&err);
                if err.is_not_found() {
                    self.close();
                } else {
                    self.error_message = Some(err.to_string());
                }
                Err(err)
            }
        }
    }

    /// Close the form without changing anything
    pub fn cancel(&mut self) {
        debug!("form cancelled");
        self.close();
    }

    fn close(&mut self) {
        self.open = false;
        self.editing_target = None;
        self.values = FormValues::new();
        self.error_message = None;
    }

    fn ensure_open(&self) -> BudgetHeadResult<()> {
        if self.open {
            Ok(())
        } else {
            Err(BudgetHeadError::Session(
                "No form is open. Use 'new' or 'open <id>' first.".into(),
            ))
        }
    }
}

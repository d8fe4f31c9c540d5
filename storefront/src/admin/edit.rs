//! Product edit lifecycle.
//!
//! One form may be open at a time. The machine moves
//! `Idle -> Editing -> Saving -> Idle` on a successful save; a failed
//! save drops back to `Editing` with the draft intact so the operator
//! can correct and retry. Nothing is applied locally before the backend
//! confirms, so there is no rollback path.

use super::AdminError;
use shared::{ProductCreate, ProductUpdate};

/// What the open form will write when saved
#[derive(Debug, Clone)]
pub enum EditTarget {
    /// Draft for a product the backend has not seen yet
    New(ProductCreate),
    /// Partial update of an existing product
    Existing(i64, ProductUpdate),
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Idle,
    Editing,
    Saving,
}

/// Single-flight product form state
#[derive(Debug)]
pub struct EditSession {
    phase: EditPhase,
    target: Option<EditTarget>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            phase: EditPhase::Idle,
            target: None,
        }
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn target(&self) -> Option<&EditTarget> {
        self.target.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.phase != EditPhase::Idle
    }

    /// Open a form. Refused while another edit is open.
    pub fn begin(&mut self, target: EditTarget) -> Result<(), AdminError> {
        if self.phase != EditPhase::Idle {
            return Err(AdminError::EditInProgress);
        }
        self.phase = EditPhase::Editing;
        self.target = Some(target);
        Ok(())
    }

    /// Mutable access to the draft while the form is open
    pub fn draft_mut(&mut self) -> Option<&mut EditTarget> {
        if self.phase == EditPhase::Editing {
            self.target.as_mut()
        } else {
            None
        }
    }

    /// Discard the open form. Ignored while a save is in flight.
    pub fn cancel(&mut self) {
        if self.phase == EditPhase::Editing {
            self.phase = EditPhase::Idle;
            self.target = None;
        }
    }

    /// Move `Editing -> Saving`, handing the draft to the caller
    pub(crate) fn start_saving(&mut self) -> Result<EditTarget, AdminError> {
        if self.phase != EditPhase::Editing {
            return Err(AdminError::NoActiveEdit);
        }
        let Some(target) = self.target.clone() else {
            return Err(AdminError::NoActiveEdit);
        };
        self.phase = EditPhase::Saving;
        Ok(target)
    }

    /// Save confirmed by the backend; the form closes
    pub(crate) fn finish_save(&mut self) {
        if self.phase == EditPhase::Saving {
            self.phase = EditPhase::Idle;
            self.target = None;
        }
    }

    /// Save rejected; the form stays open with its draft
    pub(crate) fn fail_save(&mut self) {
        if self.phase == EditPhase::Saving {
            self.phase = EditPhase::Editing;
        }
    }
}

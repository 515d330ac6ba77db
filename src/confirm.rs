use leptos::logging::log;

use crate::errors::{Result, ReviewError};
use crate::models::review::ReviewId;

/// Pending update or delete awaiting the user's confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationGate {
    #[default]
    Idle,
    PendingUpdate(ReviewId),
    PendingDelete(ReviewId),
}

impl ConfirmationGate {
    pub fn is_idle(&self) -> bool {
        matches!(self, ConfirmationGate::Idle)
    }

    pub fn request_update(&mut self, id: ReviewId) -> Result<()> {
        self.open(ConfirmationGate::PendingUpdate(id))
    }

    pub fn request_delete(&mut self, id: ReviewId) -> Result<()> {
        self.open(ConfirmationGate::PendingDelete(id))
    }

    fn open(&mut self, pending: ConfirmationGate) -> Result<()> {
        if !self.is_idle() {
            log!("[GATE] Rejected {:?} while {:?} is pending", pending, self);
            return Err(ReviewError::ConfirmationPending);
        }
        *self = pending;
        Ok(())
    }

    /// Returns the pending action and goes back to idle.
    pub fn take(&mut self) -> ConfirmationGate {
        std::mem::take(self)
    }

    /// Drops the pending action.
    pub fn cancel(&mut self) {
        *self = ConfirmationGate::Idle;
    }

    pub fn target(&self) -> Option<ReviewId> {
        match self {
            ConfirmationGate::Idle => None,
            ConfirmationGate::PendingUpdate(id) | ConfirmationGate::PendingDelete(id) => Some(*id),
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, ConfirmationGate::PendingDelete(_))
    }

    /// Question shown in the confirmation modal.
    pub fn prompt(&self) -> &'static str {
        match self {
            ConfirmationGate::PendingDelete(_) => "Are you sure you want to delete this review?",
            ConfirmationGate::PendingUpdate(_) => "Are you sure you want to update this review?",
            ConfirmationGate::Idle => "",
        }
    }
}

//! Single-record edit lock.
//!
//! While a record is being edited every other row is read-only. Asking to edit
//! a second record is rejected and leaves the current session untouched; the
//! user has to save the first one before moving on.

use roster_model::RecordId;
use tracing::debug;

use crate::error::EditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Viewing,
    Editing(RecordId),
}

impl EditSession {
    /// `Viewing -> Editing(id)`.
    ///
    /// Beginning an edit on the record that is already being edited succeeds
    /// without changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::AlreadyEditing`] if another record holds the lock.
    pub fn begin_edit(&mut self, id: RecordId) -> Result<(), EditError> {
        match *self {
            EditSession::Viewing => {
                *self = EditSession::Editing(id);
                debug!(id = %id, "edit started");
                Ok(())
            }
            EditSession::Editing(current) if current == id => Ok(()),
            EditSession::Editing(current) => Err(EditError::AlreadyEditing {
                current,
                requested: id,
            }),
        }
    }

    /// `Editing(id) -> Viewing`. Returns the id that was released.
    pub fn end_edit(&mut self) -> Option<RecordId> {
        let released = self.editing_id();
        if let Some(id) = released {
            debug!(id = %id, "edit finished");
        }
        *self = EditSession::Viewing;
        released
    }

    /// Forced `Editing(id) -> Viewing` after `id` disappeared from the store.
    pub fn release(&mut self, id: RecordId) -> bool {
        if self.is_editing(id) {
            debug!(id = %id, "edit session cleared by removal");
            *self = EditSession::Viewing;
            true
        } else {
            false
        }
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        match self {
            EditSession::Viewing => None,
            EditSession::Editing(id) => Some(*id),
        }
    }

    pub fn is_editing(&self, id: RecordId) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn is_viewing(&self) -> bool {
        matches!(self, EditSession::Viewing)
    }
}

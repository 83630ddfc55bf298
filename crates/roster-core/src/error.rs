use roster_model::RecordId;
use thiserror::Error;

/// Rejected edit-session transitions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    #[error("record {current} is already being edited; save it before editing {requested}")]
    AlreadyEditing {
        current: RecordId,
        requested: RecordId,
    },
    #[error("record {0} does not exist")]
    UnknownRecord(RecordId),
    #[error("no record is being edited")]
    NotEditing,
}

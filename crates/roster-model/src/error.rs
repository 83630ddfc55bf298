use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid record id: {0}")]
    InvalidRecordId(String),
    #[error("unknown position: {0} (expected Frontend, Backend or Hr)")]
    InvalidPosition(String),
    #[error("unknown field: {0} (expected name, dob, position or salary)")]
    InvalidField(String),
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("invalid salary: {0} (expected a non-negative whole number)")]
    InvalidSalary(String),
}

/// Reasons a [`RecordDraft`](crate::RecordDraft) cannot be submitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("full name is required")]
    EmptyFullName,
    #[error("date of birth is required")]
    EmptyDateOfBirth,
    #[error("date of birth is not a valid date: {0}")]
    InvalidDateOfBirth(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

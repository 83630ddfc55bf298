//! The "new record" form.
//!
//! The front-end edits a [`RecordDraft`] field by field and submits it
//! wholesale; only a draft that validates ever reaches the store.

use serde::{Deserialize, Serialize};

use crate::enums::Position;
use crate::error::DraftError;
use crate::record::{NewRecord, parse_date};

/// Salary pre-filled in an empty form.
pub const DEFAULT_SALARY: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub full_name: String,
    /// Raw `YYYY-MM-DD` text as typed.
    pub date_of_birth: String,
    pub position: Position,
    pub salary: u64,
}

impl Default for RecordDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            date_of_birth: String::new(),
            position: Position::default(),
            salary: DEFAULT_SALARY,
        }
    }
}

impl RecordDraft {
    /// Check required fields and convert to a typed [`NewRecord`].
    pub fn validate(&self) -> Result<NewRecord, DraftError> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err(DraftError::EmptyFullName);
        }
        let dob = self.date_of_birth.trim();
        if dob.is_empty() {
            return Err(DraftError::EmptyDateOfBirth);
        }
        let date_of_birth =
            parse_date(dob).map_err(|_| DraftError::InvalidDateOfBirth(dob.to_string()))?;
        Ok(NewRecord {
            full_name: full_name.to_string(),
            date_of_birth,
            position: self.position,
            salary: self.salary,
        })
    }
}

//! The employee record and its typed field setters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Field, Position};
use crate::error::{ModelError, Result};
use crate::ids::RecordId;

/// Textual date format used for input and display.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub position: Position,
    pub salary: u64,
}

/// A fully-populated record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub position: Position,
    pub salary: u64,
}

impl NewRecord {
    pub fn into_record(self, id: RecordId) -> Record {
        Record {
            id,
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
            position: self.position,
            salary: self.salary,
        }
    }
}

/// Replacement value for exactly one field, typed per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FullName(String),
    DateOfBirth(NaiveDate),
    Position(Position),
    Salary(u64),
}

impl FieldUpdate {
    /// Parse a raw value for `field`, rejecting values of the wrong type.
    pub fn parse(field: Field, value: &str) -> Result<Self> {
        match field {
            Field::FullName => Ok(FieldUpdate::FullName(value.to_string())),
            Field::DateOfBirth => parse_date(value).map(FieldUpdate::DateOfBirth),
            Field::Position => value.parse().map(FieldUpdate::Position),
            Field::Salary => parse_salary(value).map(FieldUpdate::Salary),
        }
    }

    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::FullName(_) => Field::FullName,
            FieldUpdate::DateOfBirth(_) => Field::DateOfBirth,
            FieldUpdate::Position(_) => Field::Position,
            FieldUpdate::Salary(_) => Field::Salary,
        }
    }
}

impl Record {
    /// Overwrite the single field named by `update`.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FullName(value) => self.full_name = value,
            FieldUpdate::DateOfBirth(value) => self.date_of_birth = value,
            FieldUpdate::Position(value) => self.position = value,
            FieldUpdate::Salary(value) => self.salary = value,
        }
    }

    /// Display text of one field, as rendered in the table.
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::FullName => self.full_name.clone(),
            Field::DateOfBirth => self.date_of_birth.format(DATE_FORMAT).to_string(),
            Field::Position => self.position.to_string(),
            Field::Salary => self.salary.to_string(),
        }
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ModelError::InvalidDate(value.to_string()))
}

/// Parse a non-negative whole salary.
pub fn parse_salary(value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| ModelError::InvalidSalary(value.to_string()))
}

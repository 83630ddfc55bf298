//! Closed categorical sets used by records.
//!
//! Both enums parse case-insensitively so that values typed at a prompt
//! round-trip with the labels shown in the table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Job position of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Frontend,
    Backend,
    Hr,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Frontend, Position::Backend, Position::Hr];

    /// Returns the label shown in tables and accepted on input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Frontend => "Frontend",
            Position::Backend => "Backend",
            Position::Hr => "Hr",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "frontend" => Ok(Position::Frontend),
            "backend" => Ok(Position::Backend),
            "hr" => Ok(Position::Hr),
            _ => Err(ModelError::InvalidPosition(s.to_string())),
        }
    }
}

/// Editable record fields.
///
/// The id is deliberately absent: it never changes after `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    DateOfBirth,
    Position,
    Salary,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FullName,
        Field::DateOfBirth,
        Field::Position,
        Field::Salary,
    ];

    /// Canonical (camelCase) field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::DateOfBirth => "dateOfBirth",
            Field::Position => "position",
            Field::Salary => "salary",
        }
    }

    /// Column header used by the table view.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::DateOfBirth => "Date of birth",
            Field::Position => "Position",
            Field::Salary => "Salary",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = ModelError;

    /// Accepts the canonical names plus the short aliases used at the prompt.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "fullname" | "full_name" | "name" => Ok(Field::FullName),
            "dateofbirth" | "date_of_birth" | "dob" => Ok(Field::DateOfBirth),
            "position" => Ok(Field::Position),
            "salary" => Ok(Field::Salary),
            _ => Err(ModelError::InvalidField(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_parses_case_insensitively() {
        assert_eq!("hr".parse::<Position>().unwrap(), Position::Hr);
        assert_eq!(" BACKEND ".parse::<Position>().unwrap(), Position::Backend);
        assert!("Designer".parse::<Position>().is_err());
    }

    #[test]
    fn field_aliases() {
        assert_eq!("dob".parse::<Field>().unwrap(), Field::DateOfBirth);
        assert_eq!("fullName".parse::<Field>().unwrap(), Field::FullName);
        assert_eq!("name".parse::<Field>().unwrap(), Field::FullName);
        assert_eq!(
            "id".parse::<Field>(),
            Err(ModelError::InvalidField("id".to_string()))
        );
    }
}

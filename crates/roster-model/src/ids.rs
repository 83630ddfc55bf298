#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::ModelError;

/// Stable handle to a record for the lifetime of the process.
///
/// Ids are random (UUID v4) and never reused; the store re-draws on collision.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Draw a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Build an id from caller-supplied random bytes.
    ///
    /// Used by seeded generators so that a dataset is reproducible.
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// First eight hex digits, enough to tell rows apart on screen.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for RecordId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ModelError::InvalidRecordId(s.to_string()))
    }
}

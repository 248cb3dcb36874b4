//! Strongly-typed ID wrapper for expense records
//!
//! Using a newtype wrapper keeps expense IDs opaque and prevents mixing them
//! up with other strings at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an expense record, assigned at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// The short form shown in listings (`exp-` plus the first 8 hex chars)
    pub fn short(&self) -> String {
        format!("exp-{}", &self.0.to_string()[..8])
    }

    /// Check whether a user-supplied string matches this ID, either as the
    /// full UUID or as a prefix of it (with or without the `exp-` prefix)
    pub fn matches(&self, s: &str) -> bool {
        let s = s.strip_prefix("exp-").unwrap_or(s);
        !s.is_empty() && self.0.to_string().starts_with(&s.to_lowercase())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Try to parse the full UUID
        if let Ok(uuid) = Uuid::parse_str(s) {
            return Ok(Self(uuid));
        }
        // Try stripping the display prefix
        let s = s.strip_prefix("exp-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

//! Validated name newtypes for domain entities

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// MoonName
// ============================================================================

/// A validated moon name (non-empty).
///
/// Unlike free-text input, moon names come from the seeded catalog and are
/// kept byte-for-byte so records read back equal to what is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MoonName(String);

impl MoonName {
    /// Create a new validated moon name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("Moon name cannot be empty"));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MoonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MoonName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<MoonName> for String {
    fn from(name: MoonName) -> String {
        name.0
    }
}

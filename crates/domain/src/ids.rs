use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Row identifier of a moon in the catalog.
///
/// Always positive. Ids are not assumed to be dense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct MoonId(i64);

impl MoonId {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::validation(format!(
                "Moon id must be positive, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MoonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for MoonId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MoonId> for i64 {
    fn from(value: MoonId) -> Self {
        value.0
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Store-assigned key of a student document.
///
/// Rendered externally as the hyphenated lowercase UUID string. Anything that
/// does not parse as a UUID is rejected with [`CoreError::InvalidId`] so a
/// malformed path segment never reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    /// Mint a fresh time-ordered key. Used by stores that generate their own ids.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for StudentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for StudentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| CoreError::InvalidId(format!("'{s}' is not a valid student id")))
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

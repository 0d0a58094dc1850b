//! What to do with whitespace-only segments produced by the clause splitter.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankClausePolicy {
    /// Drop whitespace-only segments before classification
    #[default]
    Skip,
    /// Pass every segment through verbatim, blank or not
    Keep,
}

impl BlankClausePolicy {
    #[must_use]
    pub const fn keeps_blank(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

impl fmt::Display for BlankClausePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Keep => write!(f, "keep"),
        }
    }
}

impl std::str::FromStr for BlankClausePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "keep" => Ok(Self::Keep),
            _ => Err(DomainError::UnknownBlankClausePolicy(s.to_string())),
        }
    }
}

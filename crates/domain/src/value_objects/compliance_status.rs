//! Compliance status value object
//!
//! The bucket a clause verdict ends up in after partitioning.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token the model is asked to emit for a compliant clause
pub const COMPLIANT_TOKEN: &str = "COMPLIANT";

/// Token the model is asked to emit for a non-compliant clause
pub const NON_COMPLIANT_TOKEN: &str = "NON_COMPLIANT";

/// Compliance status of a single clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Clause judged compliant
    Compliant,
    /// Clause judged non-compliant
    NonCompliant,
}

impl ComplianceStatus {
    #[must_use]
    pub const fn is_compliant(&self) -> bool {
        matches!(self, Self::Compliant)
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::NonCompliant => "Non-Compliant",
        }
    }

    /// The exact token the model must emit for this status
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Compliant => COMPLIANT_TOKEN,
            Self::NonCompliant => NON_COMPLIANT_TOKEN,
        }
    }

    /// Parse the leading verdict token of a model response
    ///
    /// Leading whitespace and markdown decoration (`*`, `#`, quotes, etc.) are
    /// skipped; the first word made of letters, digits, `_` or `-` must be
    /// exactly `COMPLIANT` or `NON_COMPLIANT` (case-insensitive, `NON-COMPLIANT`
    /// accepted). Anything else yields `None`.
    #[must_use]
    pub fn parse_leading_token(text: &str) -> Option<Self> {
        let start = text.trim_start_matches(|c: char| !c.is_alphanumeric() && c != '_');
        let token: String = start
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
            .collect();

        match token.to_uppercase().replace('-', "_").as_str() {
            COMPLIANT_TOKEN => Some(Self::Compliant),
            NON_COMPLIANT_TOKEN => Some(Self::NonCompliant),
            _ => None,
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! Verdict rule value object
//!
//! Decides how a free-text model verdict is mapped onto a [`ComplianceStatus`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ComplianceStatus;
use crate::errors::DomainError;

/// Rule used to bucket a model verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictRule {
    /// The model must open its answer with `COMPLIANT` or `NON_COMPLIANT`.
    /// Unparseable answers count as non-compliant.
    #[default]
    Strict,
    /// Compliant iff the lowercased verdict contains `"compliant"` anywhere.
    ///
    /// This matches `"non-compliant"` as well, so a verdict saying the clause
    /// is non-compliant lands in the compliant bucket. Kept for behaviour
    /// parity with the first release of the tool.
    Legacy,
}

impl VerdictRule {
    /// Apply the rule to a verdict text
    #[must_use]
    pub fn status_of(&self, verdict_text: &str) -> ComplianceStatus {
        match self {
            Self::Strict => ComplianceStatus::parse_leading_token(verdict_text)
                .unwrap_or(ComplianceStatus::NonCompliant),
            Self::Legacy => {
                if verdict_text.to_lowercase().contains("compliant") {
                    ComplianceStatus::Compliant
                } else {
                    ComplianceStatus::NonCompliant
                }
            },
        }
    }

    /// Whether the classifier prompt must ask for a leading verdict token
    #[must_use]
    pub const fn requires_token(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for VerdictRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

impl std::str::FromStr for VerdictRule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" | "token" => Ok(Self::Strict),
            "legacy" | "substring" => Ok(Self::Legacy),
            _ => Err(DomainError::UnknownVerdictRule(s.to_string())),
        }
    }
}

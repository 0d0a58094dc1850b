//! Compliance report entity
//!
//! The partitioned view over a set of clause verdicts. Every verdict ends up
//! in exactly one of the two lists and keeps its relative input order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ClauseVerdict;
use crate::value_objects::{ComplianceStatus, VerdictRule};

/// Verdicts partitioned into compliant and non-compliant clauses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Rule that produced this partition
    pub rule: VerdictRule,
    /// Verdicts bucketed as compliant, in input order
    pub compliant: Vec<ClauseVerdict>,
    /// Verdicts bucketed as non-compliant, in input order
    pub non_compliant: Vec<ClauseVerdict>,
}

impl ComplianceReport {
    /// Partition verdicts with the given rule
    pub fn partition(verdicts: impl IntoIterator<Item = ClauseVerdict>, rule: VerdictRule) -> Self {
        let (compliant, non_compliant) = verdicts
            .into_iter()
            .partition(|verdict| verdict.status(rule) == ComplianceStatus::Compliant);

        Self {
            rule,
            compliant,
            non_compliant,
        }
    }

    /// Total number of verdicts in the report
    #[must_use]
    pub fn len(&self) -> usize {
        self.compliant.len() + self.non_compliant.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compliant.is_empty() && self.non_compliant.is_empty()
    }

    #[must_use]
    pub fn non_compliant_count(&self) -> usize {
        self.non_compliant.len()
    }

    /// The agreement passes iff no clause was bucketed as non-compliant
    #[must_use]
    pub fn is_fully_compliant(&self) -> bool {
        self.non_compliant.is_empty()
    }

    #[must_use]
    pub fn overall(&self) -> OverallVerdict {
        if self.is_fully_compliant() {
            OverallVerdict::FullyCompliant
        } else {
            OverallVerdict::NonCompliant {
                count: self.non_compliant_count(),
            }
        }
    }
}

/// Pass/fail verdict for a whole agreement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OverallVerdict {
    FullyCompliant,
    NonCompliant { count: usize },
}

impl OverallVerdict {
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::FullyCompliant)
    }

    /// Banner text shown at the end of a review
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::FullyCompliant => "The agreement is fully GDPR compliant!".to_string(),
            Self::NonCompliant { count } => format!(
                "The agreement has {count} non-compliant clauses. It is not fully GDPR compliant."
            ),
        }
    }
}

impl fmt::Display for OverallVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

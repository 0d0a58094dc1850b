//! Clause verdict entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{Clause, ComplianceStatus, VerdictRule};

/// A clause paired with the model's raw verdict text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseVerdict {
    /// The clause that was judged
    pub clause: Clause,
    /// Unstructured model output, stored verbatim
    pub verdict_text: String,
}

impl ClauseVerdict {
    pub fn new(clause: Clause, verdict_text: impl Into<String>) -> Self {
        Self {
            clause,
            verdict_text: verdict_text.into(),
        }
    }

    /// Status of this verdict under the given rule
    #[must_use]
    pub fn status(&self, rule: VerdictRule) -> ComplianceStatus {
        rule.status_of(&self.verdict_text)
    }
}

//! Review pipeline settings.

use domain::{BlankClausePolicy, VerdictRule};
use serde::{Deserialize, Serialize};

/// How verdicts are bucketed and which segments reach the model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// `strict` (token-anchored) or `legacy` (substring match)
    #[serde(default)]
    pub verdict_rule: VerdictRule,

    /// `skip` or `keep` whitespace-only segments
    #[serde(default)]
    pub blank_clauses: BlankClausePolicy,
}

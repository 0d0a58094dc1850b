//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Unknown verdict rule name
    #[error("Unknown verdict rule: {0}. Use 'strict' or 'legacy'")]
    UnknownVerdictRule(String),

    /// Unknown blank clause policy name
    #[error("Unknown blank clause policy: {0}. Use 'skip' or 'keep'")]
    UnknownBlankClausePolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_verdict_rule_message() {
        let err = DomainError::UnknownVerdictRule("fuzzy".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown verdict rule: fuzzy. Use 'strict' or 'legacy'"
        );
    }

    #[test]
    fn unknown_blank_policy_message() {
        let err = DomainError::UnknownBlankClausePolicy("drop".to_string());
        assert!(err.to_string().contains("drop"));
    }
}

//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The model capability could not be initialised
    #[error("Model initialisation failed: {0}")]
    ModelInit(String),

    /// Bytes are not a parseable PDF
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The document contained no usable clauses
    #[error("No clauses could be extracted from the document")]
    EmptyDocument,

    /// A per-clause model call failed; the whole run is aborted
    #[error("Classification failed at clause {clause_index}: {reason}")]
    Classification {
        /// Zero-based position of the clause that failed
        clause_index: usize,
        /// Underlying failure
        reason: String,
    },

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_message_names_index() {
        let err = ApplicationError::Classification {
            clause_index: 1,
            reason: "Rate limit exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Classification failed at clause 1: Rate limit exceeded"
        );
    }

    #[test]
    fn invalid_and_empty_are_distinct() {
        assert_ne!(
            ApplicationError::InvalidDocument("x".into()).to_string(),
            ApplicationError::EmptyDocument.to_string()
        );
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::UnknownVerdictRule("bad rule".into()).into();
        assert!(err.to_string().contains("bad rule"));
    }
}

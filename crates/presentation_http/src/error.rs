//! API error handling
//!
//! Provides sanitized error responses that don't leak implementation details.
//! In production mode, error bodies carry no `details` and backend messages
//! are replaced by generic ones.

use application::ApplicationError;
use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Message returned when any clause failed to classify
pub const ANALYSIS_FAILED_MESSAGE: &str = "Error during GDPR compliance analysis. Please try again.";

/// Global flag to control error detail exposure
/// Set to false in production to prevent information leakage
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

/// Check if internal error details should be exposed
fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Upload was a PDF but yielded no clause to analyse
    #[error("No clauses could be extracted from the document")]
    EmptyDocument,

    /// A model call failed part-way through a review
    #[error("Analysis failed at clause {clause_index}: {reason}")]
    AnalysisFailed { clause_index: usize, reason: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::EmptyDocument => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AnalysisFailed { .. } => StatusCode::BAD_GATEWAY,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::EmptyDocument => "empty_document",
            Self::AnalysisFailed { .. } => "analysis_failed",
            Self::RateLimited => "rate_limited",
            Self::ServiceUnavailable(_) => "service_unavailable",
            Self::Internal(_) => "internal_error",
        }
    }

    fn body(&self) -> ErrorResponse {
        let expose = should_expose_details();
        let (error, details) = match self {
            // Client-side problems are safe to describe
            Self::BadRequest(msg) | Self::PayloadTooLarge(msg) => (msg.clone(), None),
            Self::EmptyDocument | Self::RateLimited => (self.to_string(), None),
            Self::AnalysisFailed {
                clause_index,
                reason,
            } => (
                ANALYSIS_FAILED_MESSAGE.to_string(),
                expose.then(|| format!("clause {clause_index}: {reason}")),
            ),
            Self::ServiceUnavailable(msg) => (
                "Service temporarily unavailable".to_string(),
                expose.then(|| msg.clone()),
            ),
            Self::Internal(msg) => (
                "An internal error occurred".to_string(),
                expose.then(|| msg.clone()),
            ),
        };

        ErrorResponse {
            error,
            code: self.code().to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            tracing::warn!(code = self.code(), error = %self, "Request failed");
        }
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::InvalidDocument(msg) => {
                Self::BadRequest(format!("Uploaded file is not a readable PDF: {msg}"))
            },
            ApplicationError::EmptyDocument => Self::EmptyDocument,
            ApplicationError::Classification {
                clause_index,
                reason,
            } => Self::AnalysisFailed {
                clause_index,
                reason,
            },
            ApplicationError::RateLimited => Self::RateLimited,
            ApplicationError::ModelInit(msg)
            | ApplicationError::Inference(msg)
            | ApplicationError::ExternalService(msg) => Self::ServiceUnavailable(msg),
            ApplicationError::NotFound(msg)
            | ApplicationError::Configuration(msg)
            | ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(err.body_text())
        } else {
            Self::BadRequest(err.body_text())
        }
    }
}

//! Inference errors

use thiserror::Error;

/// Errors that can occur during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to inference server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to inference server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Engine configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Provider requires an API key and none was configured
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// API key rejected by the provider
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Model not found or not loaded
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Server error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl InferenceError {
    /// Map a non-success HTTP status to an error
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        match status.as_u16() {
            401 | 403 => Self::Unauthorized(format!("Status {status}")),
            404 => Self::ModelNotAvailable(format!("Status {status}: {body}")),
            429 => Self::RateLimited,
            _ => Self::ServerError(format!("Status {status}: {body}")),
        }
    }

    /// Whether the failure happened before initialisation completed
    #[must_use]
    pub const fn is_init_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig(_) | Self::MissingApiKey(_) | Self::Unauthorized(_)
        )
    }
}

impl InferenceError {
    /// Map a transport failure, reporting the configured timeout on expiry
    #[must_use]
    pub fn from_transport(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

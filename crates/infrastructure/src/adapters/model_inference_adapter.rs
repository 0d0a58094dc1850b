//! Model inference adapter - Implements InferencePort using ai_core
//!
//! Wraps whichever engine the configured provider selects (Gemini or an
//! Ollama-compatible server) and maps its errors into the application layer.

use std::time::Instant;

use ai_core::{InferenceConfig, InferenceEngine, InferenceError, InferenceRequest, build_engine};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Adapter from the `ai_core` engine to the application inference port
pub struct ModelInferenceAdapter {
    engine: Box<dyn InferenceEngine>,
}

impl std::fmt::Debug for ModelInferenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelInferenceAdapter")
            .field("model", &self.engine.default_model())
            .finish_non_exhaustive()
    }
}

impl ModelInferenceAdapter {
    /// Build the engine for `config.provider`
    ///
    /// Any failure here is a model initialisation failure.
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let engine = build_engine(config).map_err(|e| ApplicationError::ModelInit(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Convert ai_core error to application error
    fn map_error(e: InferenceError) -> ApplicationError {
        match e {
            InferenceError::RateLimited => ApplicationError::RateLimited,
            InferenceError::ConnectionFailed(msg) => {
                ApplicationError::ExternalService(format!("Model connection failed: {msg}"))
            },
            InferenceError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Inference timeout after {ms}ms"))
            },
            e @ (InferenceError::MissingApiKey(_) | InferenceError::InvalidConfig(_)) => {
                ApplicationError::ModelInit(e.to_string())
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for ModelInferenceAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len(), model = %self.engine.default_model()))]
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let response = self
            .engine
            .generate(InferenceRequest::simple(prompt))
            .await
            .map_err(Self::map_error)?;

        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            model = %response.model,
            tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            latency_ms,
            "Inference completed"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        match self.engine.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                warn!(error = %e, "Inference health check failed");
                false
            },
        }
    }

    fn current_model(&self) -> String {
        self.engine.default_model().to_string()
    }
}

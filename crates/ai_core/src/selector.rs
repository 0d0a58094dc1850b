//! Engine selection by configured provider

use tracing::info;

use crate::config::{InferenceConfig, Provider};
use crate::error::InferenceError;
use crate::gemini::GeminiInferenceEngine;
use crate::ollama::OllamaInferenceEngine;
use crate::ports::InferenceEngine;

/// Construct the engine for `config.provider`
///
/// Called once at startup; the result is shared for the process lifetime.
pub fn build_engine(config: InferenceConfig) -> Result<Box<dyn InferenceEngine>, InferenceError> {
    if config.timeout_ms == 0 {
        return Err(InferenceError::InvalidConfig(
            "timeout_ms must be greater than zero".to_string(),
        ));
    }

    info!(provider = %config.provider, "Selecting inference engine");

    match config.provider {
        Provider::Gemini => Ok(Box::new(GeminiInferenceEngine::new(config)?)),
        Provider::Ollama => Ok(Box::new(OllamaInferenceEngine::new(config)?)),
    }
}

//! Pipeline assembly from configuration
//!
//! Both binaries build their services here so the HTTP server and the local
//! CLI review with identical wiring.

use std::sync::Arc;
use std::time::Duration;

use application::{
    ClassificationService, ComplianceReviewService, ExtractionService, HealthService,
    error::ApplicationError, ports::InferencePort,
};
use tracing::{info, instrument};

use crate::adapters::{EnvSecretStore, LopdfDocumentReader, ModelInferenceAdapter};
use crate::config::{API_KEY_FALLBACK_ENV, API_KEY_SECRET, AppConfig, ENV_PREFIX};

/// Grace added on top of the HTTP client timeout for a whole model call
const CALL_TIMEOUT_GRACE_MS: u64 = 5_000;

/// Services shared by the presentation layers
#[derive(Clone)]
pub struct ReviewComponents {
    pub review: Arc<ComplianceReviewService>,
    pub health: Arc<HealthService>,
    pub inference: Arc<dyn InferencePort>,
}

impl std::fmt::Debug for ReviewComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewComponents")
            .field("review", &self.review)
            .field("model", &self.inference.current_model())
            .finish_non_exhaustive()
    }
}

/// Secret store used by both binaries
///
/// `inference/api_key` resolves from `GDPR_REVIEW_INFERENCE_API_KEY`, then
/// `GEMINI_API_KEY`.
pub fn default_secret_store() -> EnvSecretStore {
    EnvSecretStore::with_prefix(ENV_PREFIX).with_fallback(API_KEY_SECRET, API_KEY_FALLBACK_ENV)
}

/// Validate `config` and build the review pipeline
///
/// Fails with `ModelInit` when the model client cannot be created, which
/// callers treat as fatal.
#[instrument(skip(config), fields(provider = %config.inference.provider, rule = %config.analysis.verdict_rule))]
pub fn build_review_components(config: &AppConfig) -> Result<ReviewComponents, ApplicationError> {
    config.validate()?;

    let inference: Arc<dyn InferencePort> =
        Arc::new(ModelInferenceAdapter::new(config.inference.clone())?);
    Ok(assemble(config, inference))
}

/// Build the pipeline around an existing inference port
pub fn assemble(config: &AppConfig, inference: Arc<dyn InferencePort>) -> ReviewComponents {
    let call_timeout =
        Duration::from_millis(config.inference.timeout_ms.saturating_add(CALL_TIMEOUT_GRACE_MS));

    let extraction = ExtractionService::new(Arc::new(LopdfDocumentReader::new()))
        .with_policy(config.analysis.blank_clauses);
    let classification =
        ClassificationService::new(Arc::clone(&inference), config.analysis.verdict_rule)
            .with_call_timeout(call_timeout);

    info!(
        model = %inference.current_model(),
        blank_clauses = %config.analysis.blank_clauses,
        call_timeout_ms = u64::try_from(call_timeout.as_millis()).unwrap_or(u64::MAX),
        "Review pipeline ready"
    );

    ReviewComponents {
        review: Arc::new(ComplianceReviewService::new(extraction, classification)),
        health: Arc::new(HealthService::new(Arc::clone(&inference))),
        inference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_core::InferenceConfig;
    use domain::VerdictRule;

    #[test]
    fn secret_store_consults_gemini_variable() {
        let store = default_secret_store();
        assert!(format!("{store:?}").contains("GEMINI_API_KEY"));
    }

    #[test]
    fn missing_gemini_key_is_model_init() {
        let result = build_review_components(&AppConfig::default());
        assert!(matches!(result, Err(ApplicationError::ModelInit(_))));
    }

    #[test]
    fn builds_with_ollama() {
        let mut config = AppConfig {
            inference: InferenceConfig::ollama(),
            ..AppConfig::default()
        };
        config.analysis.verdict_rule = VerdictRule::Legacy;

        let components = build_review_components(&config).unwrap();
        assert_eq!(components.review.rule(), VerdictRule::Legacy);
        assert_eq!(components.inference.current_model(), "qwen2.5-1.5b-instruct");
    }

    #[test]
    fn debug_omits_secrets() {
        let config = AppConfig {
            inference: InferenceConfig::gemini("do-not-print"),
            ..AppConfig::default()
        };
        let components = build_review_components(&config).unwrap();
        let debug = format!("{components:?}");
        assert!(debug.contains("gemini-2.0-flash-exp"));
        assert!(!debug.contains("do-not-print"));
    }
}

//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `analysis`: verdict rule and blank clause policy
//!
//! Model settings reuse [`ai_core::InferenceConfig`] directly.

mod analysis;
mod server;

use std::fmt;
use std::path::Path;

use ai_core::{InferenceConfig, Provider};
use application::{error::ApplicationError, ports::SecretStorePort};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub use analysis::AnalysisConfig;
pub use server::ServerConfig;

/// Prefix shared by configuration and secret environment variables
pub const ENV_PREFIX: &str = "GDPR_REVIEW";

/// Secret store key holding the model API key
pub const API_KEY_SECRET: &str = "inference/api_key";

/// Conventional variable consulted when the prefixed key is unset
pub const API_KEY_FALLBACK_ENV: &str = "GEMINI_API_KEY";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
///
/// Controls how much error detail the HTTP layer exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - full error details
    #[default]
    Development,
    /// Production environment - internal details hidden
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Option<Environment>,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Review pipeline configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of `./config.toml`
    ///
    /// An explicitly given file must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(path, None)
    }

    /// Layer defaults, file and environment
    ///
    /// `env` replaces the process environment when given.
    fn build(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., GDPR_REVIEW_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true)
                    .source(env),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_provider_defaults();
        Ok(config)
    }

    /// Swap Gemini defaults for the selected provider's own
    ///
    /// Field defaults are provider-agnostic, so a config that only names
    /// `provider = "ollama"` would otherwise point at the Gemini endpoint.
    fn apply_provider_defaults(&mut self) {
        let provider = self.inference.provider;
        if provider == Provider::Gemini {
            return;
        }
        if self.inference.base_url == Provider::Gemini.default_base_url() {
            self.inference.base_url = provider.default_base_url().to_string();
        }
        if self.inference.default_model == Provider::Gemini.default_model() {
            self.inference.default_model = provider.default_model().to_string();
        }
    }

    /// Effective environment (development when unset)
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment.unwrap_or_default()
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment() == Environment::Production
    }

    /// Fill an empty `inference.api_key` from a secret store
    ///
    /// Keys already present in the file or environment are never overridden.
    /// A missing secret is not an error here; [`AppConfig::validate`] decides
    /// whether the provider needs one.
    pub async fn resolve_secrets(
        &mut self,
        store: &dyn SecretStorePort,
    ) -> Result<(), ApplicationError> {
        if self.inference.has_api_key() {
            debug!("Inference API key already configured");
            return Ok(());
        }

        match store.get_secret(API_KEY_SECRET).await {
            Ok(key) => {
                self.inference.api_key = Some(SecretString::from(key));
                info!("Loaded inference.api_key from secret store");
            },
            Err(ApplicationError::NotFound(_)) => {
                debug!(key = API_KEY_SECRET, "No inference API key in secret store");
            },
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Check the configuration before any component is built
    ///
    /// A provider that needs a credential but has none is a model
    /// initialisation failure.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.inference.provider.requires_api_key() && !self.inference.has_api_key() {
            return Err(ApplicationError::ModelInit(format!(
                "no API key configured for provider '{}' (set {ENV_PREFIX}_INFERENCE_API_KEY or {API_KEY_FALLBACK_ENV})",
                self.inference.provider
            )));
        }
        if self.inference.timeout_ms == 0 {
            return Err(ApplicationError::Configuration(
                "inference.timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(ApplicationError::Configuration(
                "server.max_upload_bytes must be greater than zero".to_string(),
            ));
        }
        if self.is_production() && self.server.cors_enabled && self.server.allowed_origins.is_empty()
        {
            warn!("CORS allows any origin in production; set server.allowed_origins");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::telemetry::LogFormat;
    use domain::{BlankClausePolicy, VerdictRule};

    fn env(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn toml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    struct FixedStore(Option<&'static str>);

    #[async_trait::async_trait]
    impl SecretStorePort for FixedStore {
        async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| ApplicationError::NotFound(key.to_string()))
        }
    }

    #[test]
    fn environment_default() {
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn environment_display() {
        assert_eq!(format!("{}", Environment::Development), "development");
        assert_eq!(format!("{}", Environment::Production), "production");
    }

    #[test]
    fn environment_from_str() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        let result = "invalid".parse::<Environment>();
        assert!(result.unwrap_err().contains("Invalid environment"));
    }

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.max_upload_bytes, 20 * 1024 * 1024);
        assert_eq!(config.server.log_format, LogFormat::Text);
        assert_eq!(config.inference.provider, Provider::Gemini);
        assert_eq!(config.analysis.verdict_rule, VerdictRule::Strict);
        assert_eq!(config.analysis.blank_clauses, BlankClausePolicy::Skip);
        assert!(!config.is_production());
    }

    #[test]
    fn load_without_sources_gives_defaults() {
        let config = AppConfig::build(None, Some(env(&[]))).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.inference.default_model, "gemini-2.0-flash-exp");
        assert!(config.inference.api_key.is_none());
    }

    #[test]
    fn load_from_file() {
        let file = toml_file(
            r#"
environment = "production"

[server]
port = 8080
log_format = "json"

[inference]
provider = "ollama"
timeout_ms = 5000

[analysis]
verdict_rule = "legacy"
blank_clauses = "keep"
"#,
        );

        let config = AppConfig::build(Some(file.path()), Some(env(&[]))).unwrap();
        assert!(config.is_production());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.inference.provider, Provider::Ollama);
        assert_eq!(config.inference.base_url, "http://localhost:11434");
        assert_eq!(config.inference.default_model, "qwen2.5-1.5b-instruct");
        assert_eq!(config.inference.timeout_ms, 5000);
        assert_eq!(config.analysis.verdict_rule, VerdictRule::Legacy);
        assert_eq!(config.analysis.blank_clauses, BlankClausePolicy::Keep);
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file("[server]\nport = 8080\n");
        let config = AppConfig::build(
            Some(file.path()),
            Some(env(&[
                ("GDPR_REVIEW_SERVER__PORT", "9090"),
                ("GDPR_REVIEW_INFERENCE__DEFAULT_MODEL", "gemini-1.5-pro"),
                ("GDPR_REVIEW_ANALYSIS__VERDICT_RULE", "legacy"),
            ])),
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.inference.default_model, "gemini-1.5-pro");
        assert_eq!(config.analysis.verdict_rule, VerdictRule::Legacy);
    }

    #[test]
    fn explicit_ollama_url_is_kept() {
        let config = AppConfig::build(
            None,
            Some(env(&[
                ("GDPR_REVIEW_INFERENCE__PROVIDER", "ollama"),
                ("GDPR_REVIEW_INFERENCE__BASE_URL", "http://gpu-box:11434"),
            ])),
        )
        .unwrap();
        assert_eq!(config.inference.base_url, "http://gpu-box:11434");
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let result = AppConfig::build(Some(Path::new("/nonexistent/gdpr.toml")), Some(env(&[])));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_verdict_rule_is_error() {
        let result = AppConfig::build(
            None,
            Some(env(&[("GDPR_REVIEW_ANALYSIS__VERDICT_RULE", "lenient")])),
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn resolve_secrets_fills_missing_key() {
        let mut config = AppConfig::default();
        config.resolve_secrets(&FixedStore(Some("from-store"))).await.unwrap();
        assert_eq!(config.inference.api_key_str(), Some("from-store"));
    }

    #[tokio::test]
    async fn resolve_secrets_keeps_existing_key() {
        let mut config = AppConfig {
            inference: InferenceConfig::gemini("from-config"),
            ..AppConfig::default()
        };
        config.resolve_secrets(&FixedStore(Some("from-store"))).await.unwrap();
        assert_eq!(config.inference.api_key_str(), Some("from-config"));
    }

    #[tokio::test]
    async fn resolve_secrets_tolerates_missing_secret() {
        let mut config = AppConfig::default();
        config.resolve_secrets(&FixedStore(None)).await.unwrap();
        assert!(config.inference.api_key.is_none());
    }

    #[test]
    fn validate_requires_key_for_gemini() {
        let result = AppConfig::default().validate();
        let Err(ApplicationError::ModelInit(msg)) = result else {
            unreachable!("expected ModelInit, got {result:?}")
        };
        assert!(msg.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn validate_accepts_ollama_without_key() {
        let config = AppConfig {
            inference: InferenceConfig::ollama(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = AppConfig {
            inference: InferenceConfig::gemini("key"),
            ..AppConfig::default()
        };
        config.inference.timeout_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[test]
    fn serialization_never_includes_api_key() {
        let config = AppConfig {
            inference: InferenceConfig::gemini("super-secret"),
            ..AppConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("analysis"));
        assert!(!json.contains("super-secret"));
    }
}

//! Environment-based secret store adapter
//!
//! Reads secrets from environment variables. This is how the model API key
//! reaches the process in local runs and container deployments.

use std::collections::HashMap;
use std::env;

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Secret store that reads from environment variables
///
/// Keys are transformed to uppercase with slashes replaced by underscores.
/// For example: "inference/api_key" becomes "INFERENCE_API_KEY".
/// A key may additionally name fallback variables that are consulted, in
/// order, when the primary variable is unset.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore {
    /// Optional prefix for all environment variable lookups
    prefix: Option<String>,
    /// Per-key fallback variable names
    fallbacks: HashMap<String, Vec<String>>,
}

impl EnvSecretStore {
    /// Create a new environment secret store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a prefix for all environment variable lookups
    ///
    /// # Example
    /// ```
    /// use infrastructure::adapters::EnvSecretStore;
    ///
    /// let store = EnvSecretStore::with_prefix("GDPR_REVIEW");
    /// // Looking up "inference/api_key" will check "GDPR_REVIEW_INFERENCE_API_KEY"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            fallbacks: HashMap::new(),
        }
    }

    /// Also consult `env_var` (unprefixed) when `key` is not set
    #[must_use]
    pub fn with_fallback(mut self, key: impl Into<String>, env_var: impl Into<String>) -> Self {
        self.fallbacks
            .entry(key.into())
            .or_default()
            .push(env_var.into());
        self
    }

    /// Transform a key path to an environment variable name
    fn key_to_env_var(&self, key: &str) -> String {
        let normalized = key.replace(['/', '-'], "_").to_uppercase();

        match &self.prefix {
            Some(prefix) => format!("{prefix}_{normalized}"),
            None => normalized,
        }
    }

    /// All variable names consulted for `key`, in lookup order
    fn candidates(&self, key: &str) -> Vec<String> {
        std::iter::once(self.key_to_env_var(key))
            .chain(self.fallbacks.get(key).into_iter().flatten().cloned())
            .collect()
    }
}

#[async_trait]
impl SecretStorePort for EnvSecretStore {
    #[instrument(skip(self))]
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
        let candidates = self.candidates(key);

        for env_var in &candidates {
            match env::var(env_var) {
                Ok(value) if !value.trim().is_empty() => {
                    debug!(env_var = %env_var, "Retrieved secret from environment variable");
                    return Ok(value);
                },
                Ok(_) | Err(env::VarError::NotPresent) => {},
                Err(env::VarError::NotUnicode(_)) => {
                    return Err(ApplicationError::Configuration(format!(
                        "Secret contains invalid UTF-8: {env_var}"
                    )));
                },
            }
        }

        debug!(key, "Secret not found in environment");
        Err(ApplicationError::NotFound(format!(
            "Secret not found: {key} (env: {})",
            candidates.join(", ")
        )))
    }
}

//! Port for secret storage and retrieval
//!
//! Used at startup to resolve the model API credential without it ever
//! appearing in configuration files or source.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for secret storage operations
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Retrieve a secret by its key/path (e.g. "inference/api_key")
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError>;
}

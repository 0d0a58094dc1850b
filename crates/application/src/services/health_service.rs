//! Readiness checks for the model backend
//!
//! The only external dependency of a review is the text-generation model,
//! so readiness reduces to a bounded probe of the inference port.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::ports::InferencePort;

/// Default timeout for health checks in seconds
const DEFAULT_HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

/// Status of the inference backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Whether the service is healthy
    pub healthy: bool,
    /// Model name as reported by the port
    pub model: String,
    /// Response time in milliseconds (if check completed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Service for probing the model backend
pub struct HealthService {
    inference: Arc<dyn InferencePort>,
    timeout: Duration,
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService")
            .field("inference", &"<InferencePort>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HealthService {
    #[must_use]
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self {
            inference,
            timeout: Duration::from_secs(DEFAULT_HEALTH_CHECK_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Probe the inference backend within the configured timeout
    #[instrument(skip(self))]
    pub async fn check_inference(&self) -> ServiceHealth {
        let model = self.inference.current_model();
        let start = Instant::now();

        let Ok(healthy) = timeout(self.timeout, self.inference.is_healthy()).await else {
            warn!(model = %model, "Inference health check timed out");
            return ServiceHealth {
                healthy: false,
                model,
                response_time_ms: None,
                error: Some("Health check timed out".to_string()),
            };
        };

        let response_time = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        if healthy {
            debug!(model = %model, response_time_ms = response_time, "Inference healthy");
        } else {
            warn!(model = %model, response_time_ms = response_time, "Inference unhealthy");
        }

        ServiceHealth {
            healthy,
            model,
            response_time_ms: Some(response_time),
            error: (!healthy).then(|| "Inference backend reports unhealthy".to_string()),
        }
    }
}

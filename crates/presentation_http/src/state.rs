//! Application state shared across handlers

use std::sync::Arc;

use application::{ComplianceReviewService, HealthService};
use infrastructure::{AppConfig, ReviewComponents};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Extraction, classification and partitioning pipeline
    pub review_service: Arc<ComplianceReviewService>,
    /// Model backend probe for readiness
    pub health_service: Arc<HealthService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(components: &ReviewComponents, config: AppConfig) -> Self {
        Self {
            review_service: Arc::clone(&components.review),
            health_service: Arc::clone(&components.health),
            config: Arc::new(config),
        }
    }
}

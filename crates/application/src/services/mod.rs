//! Application services - Use case implementations

mod classification_service;
mod extraction_service;
mod health_service;
mod prompt;
mod review_service;

pub use classification_service::ClassificationService;
pub use extraction_service::ExtractionService;
pub use health_service::{HealthService, ServiceHealth};
pub use prompt::ClausePromptBuilder;
pub use review_service::{ComplianceReviewService, ReviewOutcome};

//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the model adapter on
//! top of `ai_core`, the lopdf-backed document reader and the environment
//! secret store. Also owns configuration loading, tracing setup and the
//! wiring that assembles the review pipeline from configuration.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod telemetry;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use adapters::*;
pub use bootstrap::{ReviewComponents, assemble, build_review_components, default_secret_store};
pub use config::{AnalysisConfig, AppConfig, Environment, ServerConfig};
pub use telemetry::{LogFormat, init_tracing};

//! Application layer - Use cases and orchestration
//!
//! Contains the extraction, classification and review use cases together
//! with the port definitions they depend on. Infrastructure adapters
//! implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

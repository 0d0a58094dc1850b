//! GDPR review HTTP presentation layer
//!
//! Exposes clause extraction, compliance checks and full document reviews
//! over a small JSON/multipart API.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::{create_app, create_router};
pub use state::AppState;

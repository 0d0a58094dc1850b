//! GDPR review CLI
//!
//! Runs the review pipeline locally or against a running server.

pub mod cli;
pub mod commands;
pub mod render;

pub use cli::{Cli, Commands};

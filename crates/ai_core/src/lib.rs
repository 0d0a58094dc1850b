//! AI Core - Text generation engines
//!
//! Provides the `InferenceEngine` port plus HTTP clients for the Gemini
//! `generateContent` API and Ollama-compatible servers.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ollama;
pub mod ports;
pub mod selector;

pub use config::{InferenceConfig, Provider};
pub use error::InferenceError;
pub use gemini::GeminiInferenceEngine;
pub use ollama::OllamaInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};
pub use selector::build_engine;

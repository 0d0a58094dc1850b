//! Google Gemini inference engine
//!
//! Talks to the `v1beta/models/{model}:generateContent` REST endpoint.

mod client;

pub use client::GeminiInferenceEngine;

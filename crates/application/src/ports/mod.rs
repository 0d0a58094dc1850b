//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod document_reader_port;
mod inference_port;
mod secret_store;

#[cfg(test)]
pub use document_reader_port::MockDocumentReaderPort;
pub use document_reader_port::DocumentReaderPort;
#[cfg(test)]
pub use inference_port::MockInferencePort;
pub use inference_port::{InferencePort, InferenceResult};
pub use secret_store::SecretStorePort;

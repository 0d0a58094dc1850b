//! Adapters implementing application ports

mod env_secret_store;
mod lopdf_document_reader;
mod model_inference_adapter;

pub use env_secret_store::EnvSecretStore;
pub use lopdf_document_reader::LopdfDocumentReader;
pub use model_inference_adapter::ModelInferenceAdapter;

//! Domain layer for GDPR agreement review
//!
//! Contains the core vocabulary of the review pipeline: documents, clauses,
//! verdicts and the compliance report, together with the pure rules that
//! split text into clauses and bucket model verdicts.
//! This layer has no I/O and defines the ubiquitous language.

pub mod clause_splitter;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use clause_splitter::{CLAUSE_DELIMITER, PAGE_SEPARATOR, join_pages, split_clauses};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

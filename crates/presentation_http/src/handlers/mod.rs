//! HTTP request handlers

pub mod compliance;
pub mod documents;
pub mod health;
pub mod system;
pub mod upload;

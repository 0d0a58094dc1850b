//! Document reader port - Interface for PDF text decoding

use async_trait::async_trait;
use domain::Document;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for turning document bytes into page texts
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentReaderPort: Send + Sync {
    /// Decode the text of every page, in page order
    ///
    /// A page whose text cannot be decoded yields an empty string. Bytes that
    /// cannot be parsed as a PDF at all fail with
    /// [`ApplicationError::InvalidDocument`].
    async fn page_texts(&self, document: &Document) -> Result<Vec<String>, ApplicationError>;
}

//! PDF text decoding with lopdf
//!
//! Parsing runs on the blocking thread pool. Pages whose text cannot be
//! decoded contribute an empty string instead of failing the document.
//!
//! lopdf terminates every text object with a newline. The one closing a page
//! is dropped, so pages joined with a single newline do not gain a blank line
//! at each page break.

use application::{error::ApplicationError, ports::DocumentReaderPort};
use async_trait::async_trait;
use domain::Document;
use tracing::{debug, instrument};

/// Document reader backed by `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfDocumentReader;

impl LopdfDocumentReader {
    pub const fn new() -> Self {
        Self
    }

    /// Decode every page of `bytes` in page order
    fn read_pages(bytes: &[u8]) -> Result<Vec<String>, ApplicationError> {
        let pdf = lopdf::Document::load_mem(bytes)
            .map_err(|e| ApplicationError::InvalidDocument(e.to_string()))?;

        let pages = pdf.get_pages();
        let texts = pages
            .keys()
            .map(|&page_number| match pdf.extract_text(&[page_number]) {
                Ok(text) => strip_page_terminator(text),
                Err(e) => {
                    debug!(page = page_number, error = %e, "Skipping undecodable page");
                    String::new()
                },
            })
            .collect();

        Ok(texts)
    }
}

/// Drop the single newline lopdf appends after the page's last text object
fn strip_page_terminator(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

#[async_trait]
impl DocumentReaderPort for LopdfDocumentReader {
    #[instrument(skip(self, document), fields(bytes = document.len()))]
    async fn page_texts(&self, document: &Document) -> Result<Vec<String>, ApplicationError> {
        let bytes = document.bytes().clone();

        let pages = tokio::task::spawn_blocking(move || Self::read_pages(&bytes))
            .await
            .map_err(|e| ApplicationError::Internal(format!("PDF decoding task failed: {e}")))??;

        debug!(pages = pages.len(), "PDF decoded");
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::pdf_with_pages;

    #[tokio::test]
    async fn reads_pages_in_order() {
        let bytes = pdf_with_pages(&["Data is stored securely.", "We sell user data without consent."]);
        let pages = LopdfDocumentReader::new()
            .page_texts(&Document::new(bytes))
            .await
            .unwrap();

        assert_eq!(
            pages,
            vec!["Data is stored securely.", "We sell user data without consent."]
        );
    }

    #[tokio::test]
    async fn page_without_text_is_empty() {
        let bytes = pdf_with_pages(&["First", "", "Third"]);
        let pages = LopdfDocumentReader::new()
            .page_texts(&Document::new(bytes))
            .await
            .unwrap();

        assert_eq!(pages, vec!["First", "", "Third"]);
    }

    #[tokio::test]
    async fn blank_lines_within_a_page_are_kept() {
        let bytes = pdf_with_pages(&["Data is stored securely.\n\nWe sell user data without consent."]);
        let pages = LopdfDocumentReader::new()
            .page_texts(&Document::new(bytes))
            .await
            .unwrap();

        assert_eq!(
            pages,
            vec!["Data is stored securely.\n\nWe sell user data without consent."]
        );
    }

    #[test]
    fn only_one_trailing_newline_is_stripped() {
        assert_eq!(strip_page_terminator("Clause.\n".to_string()), "Clause.");
        assert_eq!(strip_page_terminator("Clause.\n\n".to_string()), "Clause.\n");
        assert_eq!(strip_page_terminator("Clause.".to_string()), "Clause.");
        assert_eq!(strip_page_terminator(String::new()), "");
    }

    #[tokio::test]
    async fn garbage_is_invalid_document() {
        let result = LopdfDocumentReader::new()
            .page_texts(&Document::new(&b"%PDF-1.7\nthis is not really a pdf"[..]))
            .await;
        assert!(matches!(result, Err(ApplicationError::InvalidDocument(_))));
    }

    #[tokio::test]
    async fn non_pdf_is_invalid_document() {
        let result = LopdfDocumentReader::new()
            .page_texts(&Document::new(&b"hello world"[..]))
            .await;
        assert!(matches!(result, Err(ApplicationError::InvalidDocument(_))));
    }
}

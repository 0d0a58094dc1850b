//! Extraction service - Document bytes to ordered clauses

use std::{fmt, sync::Arc};

use domain::{BlankClausePolicy, Clause, Document, join_pages, split_clauses};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::DocumentReaderPort};

/// Service that turns an uploaded PDF into its clause sequence
pub struct ExtractionService {
    reader: Arc<dyn DocumentReaderPort>,
    policy: BlankClausePolicy,
}

impl fmt::Debug for ExtractionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl ExtractionService {
    /// Create an extraction service with the default blank clause policy
    pub fn new(reader: Arc<dyn DocumentReaderPort>) -> Self {
        Self {
            reader,
            policy: BlankClausePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: BlankClausePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn policy(&self) -> BlankClausePolicy {
        self.policy
    }

    /// Extract the ordered clause sequence from `document`
    ///
    /// Fails with `InvalidDocument` for bytes that are not a PDF and with
    /// `EmptyDocument` when no non-blank clause remains after splitting.
    #[instrument(skip(self, document), fields(bytes = document.len(), file = ?document.file_name()))]
    pub async fn extract(&self, document: &Document) -> Result<Vec<Clause>, ApplicationError> {
        if !document.has_pdf_header() {
            return Err(ApplicationError::InvalidDocument(
                "missing PDF header".to_string(),
            ));
        }

        let pages = self.reader.page_texts(document).await?;
        let page_count = pages.len();
        let text = join_pages(&pages);
        let clauses = split_clauses(&text, self.policy);

        if clauses.iter().all(Clause::is_blank) {
            debug!(pages = page_count, "Document yielded no usable clauses");
            return Err(ApplicationError::EmptyDocument);
        }

        debug!(
            pages = page_count,
            chars = text.len(),
            clauses = clauses.len(),
            "Clauses extracted"
        );

        Ok(clauses)
    }
}

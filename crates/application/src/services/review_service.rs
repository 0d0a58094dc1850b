//! Compliance review service - The end-to-end pipeline
//!
//! Runs extraction, classification and partitioning sequentially for one
//! document. Nothing is cached or persisted between runs.

use std::{fmt, time::Instant};

use domain::{Clause, ComplianceReport, Document, VerdictRule};
use serde::Serialize;
use tracing::{info, instrument};

use super::{ClassificationService, ExtractionService};
use crate::error::ApplicationError;

/// Clauses of a reviewed document together with their report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewOutcome {
    pub clauses: Vec<Clause>,
    pub report: ComplianceReport,
}

/// Orchestrates the three review stages
pub struct ComplianceReviewService {
    extraction: ExtractionService,
    classification: ClassificationService,
}

impl fmt::Debug for ComplianceReviewService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComplianceReviewService")
            .field("extraction", &self.extraction)
            .field("classification", &self.classification)
            .finish()
    }
}

impl ComplianceReviewService {
    pub const fn new(extraction: ExtractionService, classification: ClassificationService) -> Self {
        Self {
            extraction,
            classification,
        }
    }

    /// Rule used both for prompting and for partitioning
    pub const fn rule(&self) -> VerdictRule {
        self.classification.rule()
    }

    /// Extraction stage only
    pub async fn extract(&self, document: &Document) -> Result<Vec<Clause>, ApplicationError> {
        self.extraction.extract(document).await
    }

    /// Classify clauses and partition the verdicts
    ///
    /// The blank clause policy applies here too, so caller-supplied blank
    /// clauses are dropped under [`domain::BlankClausePolicy::Skip`].
    #[instrument(skip(self, clauses), fields(clauses = clauses.len()))]
    pub async fn check(&self, clauses: &[Clause]) -> Result<ComplianceReport, ApplicationError> {
        let keep_blank = self.extraction.policy().keeps_blank();
        let clauses: Vec<Clause> = clauses
            .iter()
            .filter(|clause| keep_blank || !clause.is_blank())
            .cloned()
            .collect();

        if clauses.iter().all(Clause::is_blank) {
            return Err(ApplicationError::EmptyDocument);
        }

        let started = Instant::now();
        let verdicts = self.classification.classify(&clauses).await?;
        let report = ComplianceReport::partition(verdicts, self.rule());

        info!(
            compliant = report.compliant.len(),
            non_compliant = report.non_compliant_count(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Compliance check completed"
        );

        Ok(report)
    }

    /// Full pipeline: extract, classify, partition
    #[instrument(skip(self, document), fields(bytes = document.len()))]
    pub async fn review(&self, document: &Document) -> Result<ReviewOutcome, ApplicationError> {
        let clauses = self.extract(document).await?;
        let report = self.check(&clauses).await?;
        Ok(ReviewOutcome { clauses, report })
    }
}

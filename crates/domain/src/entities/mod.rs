//! Domain entities - Single-use values for one analysis run

mod clause_verdict;
mod compliance_report;
mod document;

pub use clause_verdict::ClauseVerdict;
pub use compliance_report::{ComplianceReport, OverallVerdict};
pub use document::Document;

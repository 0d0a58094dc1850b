//! Compliance check and review handlers

use axum::{
    Json,
    extract::{Multipart, State},
};
use domain::{Clause, ClauseVerdict, ComplianceReport, VerdictRule};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::upload::read_pdf_upload;
use crate::{error::ApiError, state::AppState};

/// Clauses supplied directly by the caller
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub clauses: Vec<String>,
}

/// A clause and the model's verdict text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictItem {
    pub clause: String,
    pub result: String,
}

impl From<&ClauseVerdict> for VerdictItem {
    fn from(verdict: &ClauseVerdict) -> Self {
        Self {
            clause: verdict.clause.as_str().to_string(),
            result: verdict.verdict_text.clone(),
        }
    }
}

/// Partitioned verdicts plus the overall summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    pub rule: VerdictRule,
    pub compliant: Vec<VerdictItem>,
    pub non_compliant: Vec<VerdictItem>,
    pub non_compliant_count: usize,
    pub fully_compliant: bool,
    pub summary: String,
}

impl From<&ComplianceReport> for ReportResponse {
    fn from(report: &ComplianceReport) -> Self {
        Self {
            rule: report.rule,
            compliant: report.compliant.iter().map(VerdictItem::from).collect(),
            non_compliant: report.non_compliant.iter().map(VerdictItem::from).collect(),
            non_compliant_count: report.non_compliant_count(),
            fully_compliant: report.is_fully_compliant(),
            summary: report.overall().summary(),
        }
    }
}

/// Full review response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub clauses: Vec<String>,
    pub report: ReportResponse,
}

/// Classify caller-supplied clauses
#[instrument(skip(state, request), fields(clauses = request.clauses.len()))]
pub async fn check_clauses(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<ReportResponse>, ApiError> {
    if request.clauses.is_empty() {
        return Err(ApiError::BadRequest("At least one clause is required".to_string()));
    }

    let clauses: Vec<Clause> = request.clauses.into_iter().map(Clause::new).collect();
    let report = state.review_service.check(&clauses).await?;

    Ok(Json(ReportResponse::from(&report)))
}

/// Run the whole pipeline on an uploaded PDF
#[instrument(skip(state, multipart))]
pub async fn review_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ReviewResponse>, ApiError> {
    let document = read_pdf_upload(multipart).await?;
    let outcome = state.review_service.review(&document).await?;

    Ok(Json(ReviewResponse {
        report: ReportResponse::from(&outcome.report),
        clauses: outcome.clauses.into_iter().map(Clause::into_inner).collect(),
    }))
}

//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use domain::VerdictRule;
use infrastructure::{AppConfig, assemble, testing::pdf_with_pages};
use presentation_http::{
    AppState,
    error::{ANALYSIS_FAILED_MESSAGE, ErrorResponse},
    handlers::{
        compliance::{ReportResponse, ReviewResponse},
        documents::ClausesResponse,
        health::ReadinessResponse,
        system::StatusResponse,
    },
    routes::create_router,
};
use serde_json::json;

/// Model stub that flags clauses mentioning missing consent
struct MockInference {
    healthy: bool,
    failing: bool,
    model: String,
}

impl MockInference {
    fn new() -> Self {
        Self {
            healthy: true,
            failing: false,
            model: "mock-model".to_string(),
        }
    }

    fn unhealthy() -> Self {
        Self {
            healthy: false,
            ..Self::new()
        }
    }

    fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl InferencePort for MockInference {
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError> {
        if self.failing {
            return Err(ApplicationError::ExternalService(
                "Model connection failed: connection refused".to_string(),
            ));
        }

        let content = if prompt.contains("without consent") {
            "NON_COMPLIANT\nSelling personal data needs a lawful basis."
        } else {
            "COMPLIANT\nNo issues found."
        };
        Ok(InferenceResult {
            content: content.to_string(),
            model: self.model.clone(),
            tokens_used: Some(42),
            latency_ms: 10,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.healthy
    }

    fn current_model(&self) -> String {
        self.model.clone()
    }
}

fn server_with(inference: MockInference, config: AppConfig) -> TestServer {
    let components = assemble(&config, Arc::new(inference));
    let router = create_router(AppState::new(&components, config));
    TestServer::new(router).expect("Failed to create test server")
}

fn create_test_server() -> TestServer {
    server_with(MockInference::new(), AppConfig::default())
}

fn agreement_pdf() -> Vec<u8> {
    pdf_with_pages(&["Data is stored securely.\n\nWe sell user data without consent."])
}

fn pdf_form(bytes: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(bytes)
            .file_name("agreement.pdf")
            .mime_type("application/pdf"),
    )
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn ready_when_model_healthy() {
    let server = create_test_server();

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: ReadinessResponse = response.json();
    assert!(body.ready);
    assert!(body.inference.healthy);
    assert_eq!(body.inference.model, "mock-model");
}

#[tokio::test]
async fn not_ready_when_model_unhealthy() {
    let server = server_with(MockInference::unhealthy(), AppConfig::default());

    let response = server.get("/ready").await;

    response.assert_status_service_unavailable();
    let body: ReadinessResponse = response.json();
    assert!(!body.ready);
}

#[tokio::test]
async fn status_reports_pipeline_settings() {
    let mut config = AppConfig::default();
    config.analysis.verdict_rule = VerdictRule::Legacy;
    let server = server_with(MockInference::new(), config);

    let response = server.get("/v1/system/status").await;

    response.assert_status_ok();
    let body: StatusResponse = response.json();
    assert_eq!(body.verdict_rule, VerdictRule::Legacy);
    assert_eq!(body.provider, "gemini");
    assert!(body.inference_healthy);
}

// ============================================================================
// Clause extraction
// ============================================================================

#[tokio::test]
async fn extract_clauses_from_pdf() {
    let server = create_test_server();

    let response = server
        .post("/v1/documents/clauses")
        .multipart(pdf_form(agreement_pdf()))
        .await;

    response.assert_status_ok();
    let body: ClausesResponse = response.json();
    assert_eq!(body.clause_count, 2);
    assert_eq!(body.clauses[0].index, 0);
    assert_eq!(body.clauses[0].text, "Data is stored securely.");
    assert_eq!(body.clauses[1].text, "We sell user data without consent.");
}

#[tokio::test]
async fn non_pdf_content_type_is_rejected() {
    let server = create_test_server();
    let form = MultipartForm::new().add_part(
        "file",
        Part::text("just some text")
            .file_name("notes.txt")
            .mime_type("text/plain"),
    );

    let response = server.post("/v1/documents/clauses").multipart(form).await;

    response.assert_status_bad_request();
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "bad_request");
}

#[tokio::test]
async fn missing_file_field_is_rejected() {
    let server = create_test_server();
    let form = MultipartForm::new().add_text("comment", "no file here");

    let response = server.post("/v1/documents/clauses").multipart(form).await;

    response.assert_status_bad_request();
    let body: ErrorResponse = response.json();
    assert!(body.error.contains("file"));
}

#[tokio::test]
async fn unparseable_pdf_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/v1/documents/clauses")
        .multipart(pdf_form(b"definitely not a pdf".to_vec()))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn blank_pdf_is_unprocessable() {
    let server = create_test_server();

    let response = server
        .post("/v1/documents/clauses")
        .multipart(pdf_form(pdf_with_pages(&["", ""])))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "empty_document");
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let mut config = AppConfig::default();
    config.server.max_upload_bytes = 256;
    let server = server_with(MockInference::new(), config);

    let response = server
        .post("/v1/documents/clauses")
        .multipart(pdf_form(agreement_pdf()))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

// ============================================================================
// Compliance
// ============================================================================

#[tokio::test]
async fn check_partitions_clauses() {
    let server = create_test_server();

    let response = server
        .post("/v1/compliance/check")
        .json(&json!({
            "clauses": [
                "Users may request erasure of their data.",
                "We sell user data without consent."
            ]
        }))
        .await;

    response.assert_status_ok();
    let body: ReportResponse = response.json();
    assert_eq!(body.compliant.len(), 1);
    assert_eq!(body.non_compliant.len(), 1);
    assert_eq!(body.non_compliant_count, 1);
    assert!(!body.fully_compliant);
    assert_eq!(
        body.non_compliant[0].clause,
        "We sell user data without consent."
    );
    assert!(body.non_compliant[0].result.starts_with("NON_COMPLIANT"));
}

#[tokio::test]
async fn check_rejects_empty_clause_list() {
    let server = create_test_server();

    let response = server
        .post("/v1/compliance/check")
        .json(&json!({ "clauses": [] }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn check_drops_blank_clauses_by_default() {
    let server = create_test_server();

    let response = server
        .post("/v1/compliance/check")
        .json(&json!({ "clauses": ["Users may request erasure of their data.", ""] }))
        .await;

    response.assert_status_ok();
    let body: ReportResponse = response.json();
    assert_eq!(body.compliant.len(), 1);
    assert!(body.non_compliant.is_empty());
    assert_eq!(
        body.compliant[0].clause,
        "Users may request erasure of their data."
    );
}

#[tokio::test]
async fn check_rejects_blank_clauses() {
    let server = create_test_server();

    let response = server
        .post("/v1/compliance/check")
        .json(&json!({ "clauses": ["   ", "\n"] }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn review_runs_full_pipeline() {
    let server = create_test_server();

    let response = server
        .post("/v1/compliance/review")
        .multipart(pdf_form(agreement_pdf()))
        .await;

    response.assert_status_ok();
    let body: ReviewResponse = response.json();
    assert_eq!(body.clauses.len(), 2);
    assert_eq!(body.report.compliant.len(), 1);
    assert_eq!(body.report.non_compliant.len(), 1);
    assert_eq!(
        body.report.summary,
        "The agreement has 1 non-compliant clauses. It is not fully GDPR compliant."
    );
}

#[tokio::test]
async fn legacy_review_counts_everything_compliant() {
    let mut config = AppConfig::default();
    config.analysis.verdict_rule = VerdictRule::Legacy;
    let server = server_with(MockInference::new(), config);

    let response = server
        .post("/v1/compliance/review")
        .multipart(pdf_form(agreement_pdf()))
        .await;

    response.assert_status_ok();
    let body: ReviewResponse = response.json();
    assert!(body.report.fully_compliant);
    assert_eq!(body.report.summary, "The agreement is fully GDPR compliant!");
}

#[tokio::test]
async fn model_failure_returns_analysis_error() {
    let server = server_with(MockInference::failing(), AppConfig::default());

    let response = server
        .post("/v1/compliance/review")
        .multipart(pdf_form(agreement_pdf()))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error, ANALYSIS_FAILED_MESSAGE);
    assert_eq!(body.code, "analysis_failed");
}

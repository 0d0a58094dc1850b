//! Command implementations
//!
//! Each command returns its printable output together with the process exit
//! code, so callers decide where the text goes.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use application::{ApplicationError, ExtractionService};
use domain::Document;
use infrastructure::{
    AppConfig, LopdfDocumentReader, ReviewComponents, build_review_components,
    default_secret_store,
};
use presentation_http::{
    error::{ANALYSIS_FAILED_MESSAGE, ErrorResponse},
    handlers::compliance::{ReportResponse, ReviewResponse},
};
use tracing::{debug, info};

use crate::render;

/// Process exit codes
pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NON_COMPLIANT: u8 = 2;

/// Shown when the model client cannot be created
pub const MODEL_INIT_MESSAGE: &str = "Failed to initialize the AI model. Please check your API key.";

/// Text to print and the exit code to leave with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub code: u8,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            code: EXIT_OK,
        }
    }
}

/// Load configuration and fill the API key from the environment
pub async fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load_from(path).context("Failed to load configuration")?;
    config
        .resolve_secrets(&default_secret_store())
        .await
        .context("Failed to resolve secrets")?;
    Ok(config)
}

/// Read a PDF from disk
pub async fn read_document(path: &Path) -> anyhow::Result<Document> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(bytes = bytes.len(), path = %path.display(), "Loaded document");

    let document = Document::new(bytes);
    Ok(match path.file_name() {
        Some(name) => document.with_file_name(name.to_string_lossy()),
        None => document,
    })
}

/// Map pipeline failures to user-facing messages
fn describe(err: ApplicationError) -> anyhow::Error {
    match err {
        ApplicationError::InvalidDocument(_) | ApplicationError::EmptyDocument => {
            anyhow::Error::new(err)
                .context("Failed to extract clauses. Please ensure the PDF contains readable text.")
        },
        ApplicationError::Classification { .. } => {
            anyhow::Error::new(err).context(ANALYSIS_FAILED_MESSAGE)
        },
        ApplicationError::ModelInit(_) => anyhow::Error::new(err).context(MODEL_INIT_MESSAGE),
        other => anyhow::Error::new(other),
    }
}

/// `extract`: split the PDF and list its clauses
pub async fn extract(config: &AppConfig, file: &Path) -> anyhow::Result<Outcome> {
    let document = read_document(file).await?;
    let extraction = ExtractionService::new(Arc::new(LopdfDocumentReader::new()))
        .with_policy(config.analysis.blank_clauses);

    let clauses = extraction.extract(&document).await.map_err(describe)?;
    Ok(Outcome::ok(render::clauses(&clauses)))
}

/// Build the local pipeline, reporting model setup failures plainly
pub fn components(config: &AppConfig) -> anyhow::Result<ReviewComponents> {
    build_review_components(config).map_err(describe)
}

/// `review`: full local pipeline
pub async fn review(
    components: &ReviewComponents,
    file: &Path,
    json: bool,
) -> anyhow::Result<Outcome> {
    let document = read_document(file).await?;
    let outcome = components
        .review
        .review(&document)
        .await
        .map_err(describe)?;

    let response = ReviewResponse {
        report: ReportResponse::from(&outcome.report),
        clauses: outcome
            .clauses
            .iter()
            .map(|c| c.as_str().to_string())
            .collect(),
    };
    info!(
        clauses = response.clauses.len(),
        non_compliant = response.report.non_compliant_count,
        "Review finished"
    );

    let output = if json {
        serde_json::to_string_pretty(&response)?
    } else {
        format!(
            "{}\n{}",
            render::clauses(&outcome.clauses),
            render::report(&response.report)
        )
    };
    Ok(review_outcome(output, &response.report))
}

fn review_outcome(output: String, report: &ReportResponse) -> Outcome {
    Outcome {
        output,
        code: if report.fully_compliant {
            EXIT_OK
        } else {
            EXIT_NON_COMPLIANT
        },
    }
}

/// Format endpoint URL
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Turn a non-success response into an error carrying the server's message
async fn error_from(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => match body.details {
            Some(details) => anyhow::anyhow!("{} (HTTP {status}: {details})", body.error),
            None => anyhow::anyhow!("{} (HTTP {status})", body.error),
        },
        Err(_) => anyhow::anyhow!("Server returned HTTP {status}"),
    }
}

/// `remote`: upload to a running server
pub async fn remote(
    client: &reqwest::Client,
    url: &str,
    file: &Path,
    json: bool,
) -> anyhow::Result<Outcome> {
    let document = read_document(file).await?;
    let part = reqwest::multipart::Part::bytes(document.bytes().to_vec())
        .file_name(document.file_name().unwrap_or("agreement.pdf").to_string())
        .mime_str("application/pdf")?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = client
        .post(endpoint_url(url, "/v1/compliance/review"))
        .multipart(form)
        .send()
        .await
        .with_context(|| format!("Failed to reach {url}"))?;

    if !response.status().is_success() {
        return Err(error_from(response).await);
    }
    let body: ReviewResponse = response
        .json()
        .await
        .context("Unexpected response from server")?;

    let output = if json {
        serde_json::to_string_pretty(&body)?
    } else {
        let clauses: Vec<domain::Clause> = body.clauses.iter().map(domain::Clause::new).collect();
        format!(
            "{}\n{}",
            render::clauses(&clauses),
            render::report(&body.report)
        )
    };
    Ok(review_outcome(output, &body.report))
}

/// `status`: pretty-print the server's status document
pub async fn status(client: &reqwest::Client, url: &str) -> anyhow::Result<Outcome> {
    let response = client
        .get(endpoint_url(url, "/v1/system/status"))
        .send()
        .await
        .with_context(|| format!("Failed to reach {url}"))?;
    if !response.status().is_success() {
        return Err(error_from(response).await);
    }

    let body: serde_json::Value = response.json().await?;
    Ok(Outcome::ok(format!(
        "System Status:\n{}",
        serde_json::to_string_pretty(&body)?
    )))
}

/// `health`: readiness probe, exit code 0 when ready
pub async fn health(client: &reqwest::Client, url: &str) -> Outcome {
    match client.get(endpoint_url(url, "/ready")).send().await {
        Ok(resp) if resp.status().is_success() => Outcome::ok("Healthy".to_string()),
        Ok(resp) => Outcome {
            output: format!("Unhealthy: HTTP {}", resp.status()),
            code: EXIT_FAILURE,
        },
        Err(e) => Outcome {
            output: format!("Unhealthy: {e}"),
            code: EXIT_FAILURE,
        },
    }
}

/// Fail early on a missing input file, before any model setup
pub fn ensure_exists(file: &Path) -> anyhow::Result<()> {
    if !file.exists() {
        bail!("File not found: {}", file.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_concatenates_correctly() {
        assert_eq!(
            endpoint_url("http://localhost:3000", "/ready"),
            "http://localhost:3000/ready"
        );
    }

    #[test]
    fn endpoint_url_handles_trailing_slash() {
        assert_eq!(
            endpoint_url("http://example.com/", "/v1/compliance/review"),
            "http://example.com/v1/compliance/review"
        );
    }

    #[test]
    fn classification_failure_uses_fixed_message() {
        let err = describe(ApplicationError::Classification {
            clause_index: 2,
            reason: "timeout".to_string(),
        });
        assert_eq!(err.to_string(), ANALYSIS_FAILED_MESSAGE);
        assert!(format!("{err:#}").contains("clause 2"));
    }

    #[test]
    fn model_init_failure_message() {
        let err = describe(ApplicationError::ModelInit("no key".to_string()));
        assert_eq!(err.to_string(), MODEL_INIT_MESSAGE);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = ensure_exists(Path::new("/nonexistent/agreement.pdf")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}

//! System handlers

use axum::{Json, extract::State};
use domain::{BlankClausePolicy, VerdictRule};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// System status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub version: String,
    pub environment: String,
    pub provider: String,
    pub model: String,
    pub inference_healthy: bool,
    pub verdict_rule: VerdictRule,
    pub blank_clauses: BlankClausePolicy,
}

/// Get system status
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let inference = state.health_service.check_inference().await;

    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment().to_string(),
        provider: state.config.inference.provider.to_string(),
        model: inference.model,
        inference_healthy: inference.healthy,
        verdict_rule: state.review_service.rule(),
        blank_clauses: state.config.analysis.blank_clauses,
    })
}

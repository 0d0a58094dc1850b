//! Clause extraction handler

use axum::{Json, extract::Multipart, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::upload::read_pdf_upload;
use crate::{error::ApiError, state::AppState};

/// One extracted clause with its position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseItem {
    pub index: usize,
    pub text: String,
}

/// Clause extraction response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClausesResponse {
    pub clause_count: usize,
    pub clauses: Vec<ClauseItem>,
}

/// Split an uploaded PDF into clauses without contacting the model
#[instrument(skip(state, multipart))]
pub async fn extract_clauses(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ClausesResponse>, ApiError> {
    let document = read_pdf_upload(multipart).await?;
    let clauses = state.review_service.extract(&document).await?;

    let clauses: Vec<ClauseItem> = clauses
        .into_iter()
        .enumerate()
        .map(|(index, clause)| ClauseItem {
            index,
            text: clause.into_inner(),
        })
        .collect();

    Ok(Json(ClausesResponse {
        clause_count: clauses.len(),
        clauses,
    }))
}

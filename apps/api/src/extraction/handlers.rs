//! Axum route handlers for the Extraction API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::lead::Lead;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub count: usize,
    pub leads: Vec<Lead>,
}

/// POST /api/v1/leads/extract
///
/// Sends the raw pasted text to the extraction gateway and installs the result
/// as the entire lead collection, sorted by priority. On any gateway failure
/// the previous collection is left untouched — no partial list is ever
/// installed.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let extracted = state.gateway.extract_leads(&request.text).await?;

    let leads: Vec<Lead> = extracted
        .into_iter()
        .filter(|candidate| !candidate.context.trim().is_empty())
        .map(Lead::from_extracted)
        .collect();

    info!("extraction produced {} leads", leads.len());

    state.store.replace_all(leads);
    let leads = state.store.snapshot();

    Ok(Json(ExtractResponse {
        count: leads.len(),
        leads,
    }))
}

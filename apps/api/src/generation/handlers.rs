//! Axum route handlers for the Generation API.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::orchestrator::{generate_all, regenerate_one, BatchSummary};
use crate::models::lead::Lead;
use crate::state::AppState;

/// POST /api/v1/leads/generate-all
///
/// Sweeps every lead not already completed or generating, launches all gateway
/// calls concurrently, and responds once the whole batch has settled. Settings
/// are captured here, at launch.
pub async fn handle_generate_all(State(state): State<AppState>) -> Json<BatchSummary> {
    let settings = state.settings.get();
    let summary = generate_all(&state.store, Arc::clone(&state.gateway), settings).await;
    Json(summary)
}

/// POST /api/v1/leads/:id/regenerate
///
/// Explicit single-lead override: regenerates regardless of current status and
/// returns the updated record.
pub async fn handle_regenerate(
    State(state): State<AppState>,
    Path(lead_id): Path<Uuid>,
) -> Result<Json<Lead>, AppError> {
    let settings = state.settings.get();
    let lead = regenerate_one(&state.store, state.gateway.as_ref(), lead_id, &settings).await?;
    Ok(Json(lead))
}

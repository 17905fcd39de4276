//! Axum route handlers for the lead collection: listing, collapse flags, clear.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::lead::Lead;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LeadListResponse {
    pub count: usize,
    pub is_generating_all: bool,
    pub leads: Vec<Lead>,
}

#[derive(Debug, Deserialize)]
pub struct CollapseAllRequest {
    pub collapsed: bool,
}

/// GET /api/v1/leads
///
/// Snapshot of the collection in priority order, plus the aggregate batch flag.
pub async fn handle_list(State(state): State<AppState>) -> Json<LeadListResponse> {
    let leads = state.store.snapshot();
    Json(LeadListResponse {
        count: leads.len(),
        is_generating_all: state.store.is_generating_all(),
        leads,
    })
}

/// PATCH /api/v1/leads/:id/collapse
///
/// Flips one lead's collapse flag and returns the updated record. Display
/// state only — independent of generation status.
pub async fn handle_toggle_collapse(
    State(state): State<AppState>,
    Path(lead_id): Path<Uuid>,
) -> Result<Json<Lead>, AppError> {
    state
        .store
        .toggle_collapse(lead_id)
        .ok_or_else(|| AppError::NotFound(format!("Lead {lead_id} not found")))?;

    let lead = state
        .store
        .get(lead_id)
        .ok_or_else(|| AppError::NotFound(format!("Lead {lead_id} not found")))?;

    Ok(Json(lead))
}

/// POST /api/v1/leads/collapse-all
pub async fn handle_collapse_all(
    State(state): State<AppState>,
    Json(request): Json<CollapseAllRequest>,
) -> StatusCode {
    state.store.set_all_collapsed(request.collapsed);
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/leads
///
/// Empties the collection unconditionally. The UI confirms intent before
/// calling this; session settings are deliberately left untouched.
pub async fn handle_clear(State(state): State<AppState>) -> StatusCode {
    state.store.clear();
    StatusCode::NO_CONTENT
}

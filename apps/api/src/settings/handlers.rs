//! Axum route handlers for the session Settings API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::settings::AppSettings;
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn handle_get_settings(State(state): State<AppState>) -> Json<AppSettings> {
    Json(state.settings.get())
}

/// PUT /api/v1/settings
///
/// Replaces the session settings. Calls already in flight keep the settings
/// captured at their launch; only later generations see the new values.
pub async fn handle_update_settings(
    State(state): State<AppState>,
    Json(settings): Json<AppSettings>,
) -> Result<Json<AppSettings>, AppError> {
    if settings.language.trim().is_empty() {
        return Err(AppError::Validation("language cannot be empty".to_string()));
    }
    state.settings.set(settings);
    Ok(Json(state.settings.get()))
}

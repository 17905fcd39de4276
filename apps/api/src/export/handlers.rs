//! Axum route handlers for the Export API.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::errors::AppError;
use crate::export::ExportFormat;
use crate::state::AppState;

/// GET /api/v1/export/:format
///
/// Serializes the current collection snapshot and serves it as a downloadable
/// file named `leads-export-<ISO-date>.<ext>`.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Result<Response, AppError> {
    let format: ExportFormat = format
        .parse()
        .map_err(AppError::Validation)?;

    let leads = state.store.snapshot();
    let body = format.render(&leads)?;
    let filename = format.filename(Utc::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, format.mime_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response())
}

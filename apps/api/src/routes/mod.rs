pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::extraction::handlers as extraction_handlers;
use crate::generation::handlers as generation_handlers;
use crate::leads::handlers as lead_handlers;
use crate::settings::handlers as settings_handlers;
use crate::state::AppState;
use crate::stats;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Lead pipeline
        .route(
            "/api/v1/leads/extract",
            post(extraction_handlers::handle_extract),
        )
        .route(
            "/api/v1/leads",
            get(lead_handlers::handle_list).delete(lead_handlers::handle_clear),
        )
        .route("/api/v1/leads/stats", get(stats::handle_stats))
        .route(
            "/api/v1/leads/generate-all",
            post(generation_handlers::handle_generate_all),
        )
        .route(
            "/api/v1/leads/:id/regenerate",
            post(generation_handlers::handle_regenerate),
        )
        // Display flags
        .route(
            "/api/v1/leads/:id/collapse",
            patch(lead_handlers::handle_toggle_collapse),
        )
        .route(
            "/api/v1/leads/collapse-all",
            post(lead_handlers::handle_collapse_all),
        )
        // Export & settings
        .route("/api/v1/export/:format", get(export_handlers::handle_export))
        .route(
            "/api/v1/settings",
            get(settings_handlers::handle_get_settings)
                .put(settings_handlers::handle_update_settings),
        )
        .with_state(state)
}

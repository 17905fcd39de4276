mod config;
mod errors;
mod export;
mod extraction;
mod gateway;
mod generation;
mod leads;
mod llm_client;
mod models;
mod routes;
mod settings;
mod state;
mod stats;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gateway::GeminiGateway;
use crate::leads::store::LeadStore;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::settings::SettingsStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Outreach API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the LLM gateway
    let llm = GeminiClient::new(config.gemini_api_key.clone());
    let gateway = Arc::new(GeminiGateway::new(llm));
    info!(
        "LLM gateway initialized (extraction: {}, generation: {})",
        llm_client::EXTRACTION_MODEL,
        llm_client::GENERATION_MODEL
    );

    // Build app state: in-memory, single-session stores
    let state = AppState {
        gateway,
        store: LeadStore::new(),
        settings: SettingsStore::new(),
    };

    // Build router; the consumer is a browser UI, hence permissive CORS
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

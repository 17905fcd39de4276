use std::sync::Arc;

use crate::gateway::OutreachGateway;
use crate::leads::store::LeadStore;
use crate::settings::SettingsStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// AI service boundary. Behind a trait so tests can inject a fake.
    pub gateway: Arc<dyn OutreachGateway>,
    /// Single owner of the lead collection and its generation statuses.
    pub store: LeadStore,
    /// Session-wide generation settings; survive a lead-collection clear.
    pub settings: SettingsStore,
}

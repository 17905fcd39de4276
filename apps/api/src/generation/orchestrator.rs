//! Batch Orchestrator — drives message generation across one or many leads.
//!
//! All per-lead calls are launched concurrently and are mutually independent:
//! one lead's failure never aborts or delays another's. Eligible leads are
//! claimed in a single atomic sweep before any call is issued, which is what
//! makes repeated bulk triggers idempotent (at most one in-flight request per
//! lead). An explicit single-lead regenerate bypasses that check — it is a
//! user override. The regenerate-vs-sweep race on the same lead is left
//! unresolved by design: the last status write wins.

use std::sync::Arc;

use futures::future;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::gateway::OutreachGateway;
use crate::leads::store::LeadStore;
use crate::models::lead::{GenerationStatus, Lead};
use crate::models::settings::AppSettings;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BatchSummary {
    pub launched: usize,
    pub completed: usize,
    pub failed: usize,
}

/// Generates a message for every lead not already `completed` or `generating`.
/// Returns only once every launched call has settled; the store's aggregate
/// flag stays up for exactly that window.
///
/// Settings are captured at launch — a mid-batch settings change applies only
/// to batches started after it.
pub async fn generate_all(
    store: &LeadStore,
    gateway: Arc<dyn OutreachGateway>,
    settings: AppSettings,
) -> BatchSummary {
    let _guard = store.begin_batch();
    let claimed = store.claim_pending();
    let launched = claimed.len();

    let calls = claimed.into_iter().map(|lead| {
        let gateway = Arc::clone(&gateway);
        let store = store.clone();
        let settings = settings.clone();
        async move { generate_one(&store, gateway.as_ref(), lead, &settings).await }
    });

    let results = future::join_all(calls).await;
    let completed = results.iter().filter(|ok| **ok).count();

    let summary = BatchSummary {
        launched,
        completed,
        failed: launched - completed,
    };
    info!(
        "batch generation settled: launched={} completed={} failed={}",
        summary.launched, summary.completed, summary.failed
    );
    summary
}

/// Regenerates a single lead regardless of its current status and returns the
/// updated record. Unknown ids are a 404 at this boundary; the store itself
/// stays a silent no-op.
pub async fn regenerate_one(
    store: &LeadStore,
    gateway: &dyn OutreachGateway,
    lead_id: Uuid,
    settings: &AppSettings,
) -> Result<Lead, AppError> {
    let claimed = store
        .claim_one(lead_id)
        .ok_or_else(|| AppError::NotFound(format!("Lead {lead_id} not found")))?;

    generate_one(store, gateway, claimed, settings).await;

    store
        .get(lead_id)
        .ok_or_else(|| AppError::NotFound(format!("Lead {lead_id} not found")))
}

/// One lead's `generating` → `completed`|`error` transition. The failure is
/// fully absorbed here: recorded as status, never propagated.
async fn generate_one(
    store: &LeadStore,
    gateway: &dyn OutreachGateway,
    lead: Lead,
    settings: &AppSettings,
) -> bool {
    match gateway.generate_message(&lead, settings).await {
        Ok(message) => {
            store.set_status(lead.id, GenerationStatus::Completed, Some(message));
            true
        }
        Err(e) => {
            warn!("message generation failed for lead {}: {e}", lead.id);
            store.set_status(lead.id, GenerationStatus::Error, None);
            false
        }
    }
}

//! Lead Store — single source of truth for the lead collection and per-lead
//! generation status.
//!
//! Every mutation is a read-latest → transform → write under one lock, so two
//! generation completions racing to update different leads never lose each
//! other's writes. No other component holds a writable copy of the collection.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::models::lead::{GenerationStatus, Lead};

#[derive(Clone, Default)]
pub struct LeadStore {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    leads: RwLock<Vec<Lead>>,
    /// Number of batch sweeps currently in flight. The aggregate
    /// "generating all" flag is simply `count > 0`.
    active_batches: AtomicUsize,
}

/// RAII guard for one batch sweep. Dropping it (on any exit path, including
/// panics inside the orchestrator) decrements the active-batch counter.
pub struct BatchGuard {
    inner: Arc<StoreInner>,
}

impl Drop for BatchGuard {
    fn drop(&mut self) {
        self.inner.active_batches.fetch_sub(1, Ordering::SeqCst);
    }
}

impl LeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a freshly extracted list as the entire collection, discarding
    /// the previous one. Sorting is stable: equal-priority leads keep their
    /// extraction order.
    pub fn replace_all(&self, mut leads: Vec<Lead>) {
        leads.sort_by_key(|l| l.priority.rank());
        let mut guard = self.write();
        *guard = leads;
    }

    pub fn snapshot(&self) -> Vec<Lead> {
        self.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Lead> {
        self.read().iter().find(|l| l.id == id).cloned()
    }

    /// Transitions one lead's status. Silent no-op if the id is unknown (leads
    /// are never removed individually, so this is theoretically unreachable —
    /// but it must never crash).
    ///
    /// Entering `generating` forces the card open so the user sees the spinner;
    /// `completed` installs the message atomically.
    pub fn set_status(&self, id: Uuid, status: GenerationStatus, message: Option<String>) {
        let mut guard = self.write();
        let Some(lead) = guard.iter_mut().find(|l| l.id == id) else {
            return;
        };
        lead.status = status;
        match status {
            GenerationStatus::Generating => lead.is_collapsed = false,
            GenerationStatus::Completed => {
                if message.is_some() {
                    lead.generated_message = message;
                }
            }
            _ => {}
        }
    }

    /// Atomically claims every lead eligible for a bulk sweep: anything not
    /// already `completed` or `generating` transitions to `generating` and is
    /// returned. Because the selection and the transition happen under one
    /// write lock, a second sweep racing with the first claims nothing —
    /// repeated bulk triggers never duplicate work.
    pub fn claim_pending(&self) -> Vec<Lead> {
        let mut guard = self.write();
        let mut claimed = Vec::new();
        for lead in guard.iter_mut() {
            if matches!(
                lead.status,
                GenerationStatus::Completed | GenerationStatus::Generating
            ) {
                continue;
            }
            lead.status = GenerationStatus::Generating;
            lead.is_collapsed = false;
            claimed.push(lead.clone());
        }
        claimed
    }

    /// Claims a single lead for regeneration regardless of its current status —
    /// an explicit user override. Returns `None` if the id is unknown.
    pub fn claim_one(&self, id: Uuid) -> Option<Lead> {
        let mut guard = self.write();
        let lead = guard.iter_mut().find(|l| l.id == id)?;
        lead.status = GenerationStatus::Generating;
        lead.is_collapsed = false;
        Some(lead.clone())
    }

    /// Flips one lead's collapse flag. Returns the new flag, or `None` if the
    /// id is unknown.
    pub fn toggle_collapse(&self, id: Uuid) -> Option<bool> {
        let mut guard = self.write();
        let lead = guard.iter_mut().find(|l| l.id == id)?;
        lead.is_collapsed = !lead.is_collapsed;
        Some(lead.is_collapsed)
    }

    pub fn set_all_collapsed(&self, collapsed: bool) {
        let mut guard = self.write();
        for lead in guard.iter_mut() {
            lead.is_collapsed = collapsed;
        }
    }

    /// Empties the collection unconditionally. Confirming user intent is the
    /// caller's job. Session settings are not touched.
    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn begin_batch(&self) -> BatchGuard {
        self.inner.active_batches.fetch_add(1, Ordering::SeqCst);
        BatchGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    pub fn is_generating_all(&self) -> bool {
        self.inner.active_batches.load(Ordering::SeqCst) > 0
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Lead>> {
        self.inner.leads.read().expect("lead store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Lead>> {
        self.inner.leads.write().expect("lead store lock poisoned")
    }
}

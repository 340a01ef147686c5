//! Latest-wins request tagging and view liveness.
//!
//! A view that refetches when its inputs change tags each request with a
//! ticket from [`RequestSeq`]; a response is applied only if its ticket is
//! still the newest. [`ViewLiveness`] is flipped off in `on_cleanup` so
//! responses landing after unmount are dropped.

#[cfg(test)]
#[path = "request_seq_test.rs"]
mod request_seq_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Monotonic per-view request counter.
#[derive(Clone, Debug, Default)]
pub struct RequestSeq {
    latest: Arc<AtomicU64>,
}

impl RequestSeq {
    /// Start a new request; every earlier ticket becomes stale.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}

/// Cleared when the owning view unmounts.
#[derive(Clone, Debug)]
pub struct ViewLiveness {
    alive: Arc<AtomicBool>,
}

impl Default for ViewLiveness {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl ViewLiveness {
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while the view is mounted. Returns whether it ran.
    pub fn apply_if_alive(&self, apply: impl FnOnce()) -> bool {
        if !self.is_alive() {
            log::debug!("view unmounted; dropping async result");
            return false;
        }
        apply();
        true
    }

    /// Create a liveness flag tied to the current reactive owner.
    pub fn for_current_view() -> Self {
        let liveness = Self::default();
        let on_drop = liveness.clone();
        leptos::prelude::on_cleanup(move || on_drop.end());
        liveness
    }
}

/// Whether a response for `ticket` may still be applied.
pub fn should_apply(seq: &RequestSeq, liveness: &ViewLiveness, ticket: u64) -> bool {
    liveness.is_alive() && seq.is_current(ticket)
}

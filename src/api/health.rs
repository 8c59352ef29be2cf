//! Shared health state for the /health endpoint.
//! Updated by the keyword handlers, read by the health handler.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process counters. Updated by request handlers, read by /health.
#[derive(Default)]
pub struct HealthState {
    /// Total generation runs served.
    pub queries_served: AtomicU64,
    /// Total keyword records emitted across all runs.
    pub records_emitted: AtomicU64,
    /// Nanosecond timestamp of the last generation run (0 = none yet).
    pub last_generated_at_ns: AtomicU64,
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_generation(&self, records: usize, now_ns: u64) {
        self.queries_served.fetch_add(1, Ordering::Relaxed);
        self.records_emitted.fetch_add(records as u64, Ordering::Relaxed);
        self.last_generated_at_ns.store(now_ns, Ordering::Relaxed);
    }

    pub fn queries_served(&self) -> u64 {
        self.queries_served.load(Ordering::Relaxed)
    }

    pub fn records_emitted(&self) -> u64 {
        self.records_emitted.load(Ordering::Relaxed)
    }

    pub fn last_generated_at_ns(&self) -> u64 {
        self.last_generated_at_ns.load(Ordering::Relaxed)
    }
}

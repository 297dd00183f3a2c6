use std::sync::{
    atomic::{AtomicU32, AtomicU64, Ordering},
    Mutex,
};

use crate::transport::TransportError;

/// Counters shared between a sync loop and the cycles it spawns
#[derive(Default)]
pub(crate) struct SyncStats {
    ticks: AtomicU64,
    cycles: AtomicU64,
    skipped: AtomicU64,
    published: AtomicU64,
    failed: AtomicU64,
    consecutive_failures: AtomicU32,
    last_error: Mutex<Option<TransportError>>,
}

impl SyncStats {
    pub(crate) fn record_tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_cycle(&self) {
        self.cycles.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_skip(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_published(&self) {
        self.published.fetch_add(1, Ordering::Relaxed);
        self.consecutive_failures.store(0, Ordering::Relaxed);
    }

    pub(crate) fn record_failure(&self, error: TransportError) {
        self.failed.fetch_add(1, Ordering::Relaxed);
        self.consecutive_failures.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last_error) = self.last_error.lock() {
            *last_error = Some(error);
        }
    }

    pub(crate) fn health(&self, stall_threshold: u32) -> SyncHealth {
        SyncHealth {
            ticks: self.ticks.load(Ordering::Relaxed),
            cycles: self.cycles.load(Ordering::Relaxed),
            skipped_ticks: self.skipped.load(Ordering::Relaxed),
            published: self.published.load(Ordering::Relaxed),
            failed_cycles: self.failed.load(Ordering::Relaxed),
            consecutive_failures: self.consecutive_failures.load(Ordering::Relaxed),
            last_error: self
                .last_error
                .lock()
                .ok()
                .and_then(|last_error| last_error.clone()),
            stall_threshold,
        }
    }
}

/// Point-in-time report of how a sync loop is doing.
///
/// A failing loop only shows up to players as a board that stops moving; this
/// makes the same condition visible to code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncHealth {
    /// Timer ticks observed
    pub ticks: u64,
    /// Cycles actually started
    pub cycles: u64,
    /// Ticks dropped because the previous cycle was still in flight
    pub skipped_ticks: u64,
    /// Snapshots published by completed cycles
    pub published: u64,
    /// Cycles abandoned on a transport failure
    pub failed_cycles: u64,
    /// Failed cycles since the last publish
    pub consecutive_failures: u32,
    /// Most recent transport failure
    pub last_error: Option<TransportError>,
    stall_threshold: u32,
}

impl SyncHealth {
    pub fn is_stalled(&self) -> bool {
        self.stall_threshold > 0 && self.consecutive_failures >= self.stall_threshold
    }
}

//! In-memory visit counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-lifetime page view counter.
///
/// Starts at zero and only ever moves forward, one step per recorded
/// render. `record` is a single atomic increment, so renders racing on a
/// multi-threaded runtime still observe gap-free, duplicate-free counts.
/// Nothing is persisted; the count dies with the process.
#[derive(Debug, Default)]
pub struct VisitCounter {
    hits: AtomicU64,
}

impl VisitCounter {
    pub fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
        }
    }

    /// Record one page render and report the new total.
    pub fn record(&self) -> u64 {
        self.hits.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current total without recording a render.
    pub fn current(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }
}

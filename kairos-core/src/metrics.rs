//! # Metrics
//!
//! Operation counters for monitoring a store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector
#[derive(Clone, Default)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

#[derive(Default)]
struct MetricsInner {
    // Write metrics
    events_inserted: AtomicU64,
    events_overwritten: AtomicU64,

    // Removal metrics
    events_removed: AtomicU64,
    types_removed: AtomicU64,

    // Query metrics
    queries_executed: AtomicU64,
    query_errors: AtomicU64,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an insert; `overwrote` is set when the key already held an event
    pub fn record_insert(&self, overwrote: bool) {
        self.inner.events_inserted.fetch_add(1, Ordering::Relaxed);
        if overwrote {
            self.inner.events_overwritten.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a single event removed through a cursor
    pub fn record_event_removed(&self) {
        self.inner.events_removed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a whole type removed
    pub fn record_type_removed(&self) {
        self.inner.types_removed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record query execution
    pub fn record_query(&self) {
        self.inner.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record query error
    pub fn record_query_error(&self) {
        self.inner.query_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            events_inserted: self.inner.events_inserted.load(Ordering::Relaxed),
            events_overwritten: self.inner.events_overwritten.load(Ordering::Relaxed),
            events_removed: self.inner.events_removed.load(Ordering::Relaxed),
            types_removed: self.inner.types_removed.load(Ordering::Relaxed),
            queries_executed: self.inner.queries_executed.load(Ordering::Relaxed),
            query_errors: self.inner.query_errors.load(Ordering::Relaxed),
        }
    }
}

/// Metrics snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub events_inserted: u64,
    pub events_overwritten: u64,
    pub events_removed: u64,
    pub types_removed: u64,
    pub queries_executed: u64,
    pub query_errors: u64,
}

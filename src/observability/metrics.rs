//! Counters for contact operations and HTTP traffic.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared metrics tracker for the application.
///
/// Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct MetricsTracker {
    http_requests_total: Arc<AtomicU64>,
    http_errors_total: Arc<AtomicU64>,
    creates_accepted_total: Arc<AtomicU64>,
    creates_rejected_total: Arc<AtomicU64>,
    retrievals_total: Arc<AtomicU64>,
    retrieval_hits_total: Arc<AtomicU64>,
}

/// Point-in-time copy of every counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub creates_accepted_total: u64,
    pub creates_rejected_total: u64,
    pub retrievals_total: u64,
    pub retrieval_hits_total: u64,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track an HTTP request.
    pub fn track_http_request(&self, route: &str, duration_ms: u128, success: bool) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.http_errors_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            route = %route,
            duration_ms = duration_ms,
            success = success,
            "HTTP request completed"
        );
    }

    /// Track the outcome of a create call.
    pub fn track_create(&self, accepted: bool) {
        if accepted {
            self.creates_accepted_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.creates_rejected_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Track a retrieval and whether it found a contact.
    pub fn track_retrieve(&self, hit: bool) {
        self.retrievals_total.fetch_add(1, Ordering::Relaxed);
        if hit {
            self.retrieval_hits_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Copy all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            http_requests_total: self.http_requests_total.load(Ordering::Relaxed),
            http_errors_total: self.http_errors_total.load(Ordering::Relaxed),
            creates_accepted_total: self.creates_accepted_total.load(Ordering::Relaxed),
            creates_rejected_total: self.creates_rejected_total.load(Ordering::Relaxed),
            retrievals_total: self.retrievals_total.load(Ordering::Relaxed),
            retrieval_hits_total: self.retrieval_hits_total.load(Ordering::Relaxed),
        }
    }

    /// Fraction of retrievals that found a contact (0.0 to 1.0).
    pub fn retrieval_hit_rate(&self) -> f64 {
        let snapshot = self.snapshot();
        if snapshot.retrievals_total == 0 {
            0.0
        } else {
            snapshot.retrieval_hits_total as f64 / snapshot.retrievals_total as f64
        }
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer with a specific status, returning elapsed milliseconds.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        if success {
            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation succeeded"
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        duration_ms
    }
}

//! Per-queue dispatch counters.
//!
//! Plain atomics, no enable/disable gate — a fixed 4-queue dispatcher has no
//! throughput-sensitive reason to make this optional, unlike a
//! high-fan-out channel where every counter increment costs something under
//! contention.

use crate::layout::NUM_QUEUES;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one queue.
#[derive(Debug, Default)]
struct QueueCounters {
    dispatched: AtomicU64,
    unknown_code: AtomicU64,
    handler_error: AtomicU64,
    response_queue_full: AtomicU64,
}

/// Dispatch counters for every queue in a [`crate::queue_set::QueueSet`].
#[derive(Debug, Default)]
pub struct Metrics {
    queues: [QueueCounters; NUM_QUEUES],
}

impl Metrics {
    /// All counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_dispatched(&self, queue: usize) {
        self.queues[queue].dispatched.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_unknown_code(&self, queue: usize) {
        self.queues[queue].unknown_code.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_handler_error(&self, queue: usize) {
        self.queues[queue].handler_error.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_response_queue_full(&self, queue: usize) {
        self.queues[queue]
            .response_queue_full
            .fetch_add(1, Ordering::Relaxed);
    }

    /// A point-in-time snapshot for one queue.
    #[must_use]
    pub fn snapshot(&self, queue: usize) -> QueueMetricsSnapshot {
        let q = &self.queues[queue];
        QueueMetricsSnapshot {
            dispatched: q.dispatched.load(Ordering::Relaxed),
            unknown_code: q.unknown_code.load(Ordering::Relaxed),
            handler_error: q.handler_error.load(Ordering::Relaxed),
            response_queue_full: q.response_queue_full.load(Ordering::Relaxed),
        }
    }
}

/// A consistent-enough (not atomically sampled across fields) snapshot of one
/// queue's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueMetricsSnapshot {
    /// Requests that reached a registered handler.
    pub dispatched: u64,
    /// Requests with no registered handler (status `0xFE`).
    pub unknown_code: u64,
    /// Requests whose handler returned a non-zero status.
    pub handler_error: u64,
    /// Scan passes where `response_push` returned `QueueFull`.
    pub response_queue_full: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_metrics_are_zero() {
        let metrics = Metrics::new();
        assert_eq!(metrics.snapshot(0), QueueMetricsSnapshot::default());
    }

    #[test]
    fn counters_are_independent_per_queue() {
        let metrics = Metrics::new();
        metrics.record_dispatched(0);
        metrics.record_unknown_code(1);
        assert_eq!(metrics.snapshot(0).dispatched, 1);
        assert_eq!(metrics.snapshot(0).unknown_code, 0);
        assert_eq!(metrics.snapshot(1).unknown_code, 1);
    }
}

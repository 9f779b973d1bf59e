//! Error taxonomy for ring operations and the dispatcher loop.

use thiserror::Error;

/// Errors from a single ring push/pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// The ring is at capacity; the push was not performed.
    #[error("queue {queue} is full")]
    QueueFull {
        /// Index of the queue whose ring is full.
        queue: usize,
    },
    /// The ring has nothing to pop. Not a fault — the scan loop treats this
    /// as "move to the next queue."
    #[error("queue {queue} is empty")]
    QueueEmpty {
        /// Index of the queue whose ring is empty.
        queue: usize,
    },
}

/// Fatal dispatcher-level errors. These never propagate out of
/// [`crate::Dispatcher::scan`] as a `panic`; they trigger a logged recovery
/// (queue reinitialization) instead, per `spec.md` §7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A queue's header pointers are in a state the wrap discipline forbids
    /// (e.g. apparent occupancy greater than capacity). Uninitialized or
    /// corrupted shared memory is the expected cause.
    #[error("queue {queue} has an invalid header: request_wptr={request_wptr} request_rptr={request_rptr}")]
    InvalidHeader {
        /// Index of the offending queue.
        queue: usize,
        /// The raw `request_wptr` value observed.
        request_wptr: u32,
        /// The raw `request_rptr` value observed.
        request_rptr: u32,
    },
}

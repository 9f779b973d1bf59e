//! Owns the shared-memory state for all queues: headers, request slots, and
//! response slots.
//!
//! A [`QueueSet`] is created once at init and lives for the process
//! lifetime — `request_push`/`response_pop` below stand in for what a real
//! host would do across the shared-memory boundary, and are also the hooks
//! integration tests use to impersonate the host.

use crate::error::RingError;
use crate::layout::{QueueHeader, Request, Response, CAPACITY, NUM_QUEUES};
use crate::ring::Ring;
use std::cell::UnsafeCell;

/// The four (header, request ring, response ring) triplets exposed to the
/// host.
pub struct QueueSet {
    headers: [QueueHeader; NUM_QUEUES],
    request_slots: [UnsafeCell<[Request; CAPACITY]>; NUM_QUEUES],
    response_slots: [UnsafeCell<[Response; CAPACITY]>; NUM_QUEUES],
}

// SAFETY: the only shared mutable state is the slot arrays and the atomics
// inside QueueHeader; access to each is mediated by the push/pop protocol in
// `Ring`, which is itself Send + Sync for Send payloads.
unsafe impl Sync for QueueSet {}

impl QueueSet {
    /// A fresh queue set: all headers zeroed (both rings of every queue
    /// empty), all slots zero-initialized.
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: std::array::from_fn(|_| QueueHeader::new()),
            request_slots: std::array::from_fn(|_| UnsafeCell::new([Request::ZERO; CAPACITY])),
            response_slots: std::array::from_fn(|_| UnsafeCell::new([Response::ZERO; CAPACITY])),
        }
    }

    /// Number of queues in this set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        NUM_QUEUES
    }

    #[inline]
    pub(crate) fn request_ring(&self, queue: usize) -> Ring<'_, Request> {
        let header = &self.headers[queue];
        Ring::new(
            &header.request_wptr,
            &header.request_rptr,
            &self.request_slots[queue],
        )
    }

    #[inline]
    pub(crate) fn response_ring(&self, queue: usize) -> Ring<'_, Response> {
        let header = &self.headers[queue];
        Ring::new(
            &header.response_wptr,
            &header.response_rptr,
            &self.response_slots[queue],
        )
    }

    /// `true` if `queue`'s request ring's raw pointers are in a state the
    /// wrap discipline forbids (apparent occupancy greater than `CAPACITY`).
    /// Uninitialized or corrupted shared memory is the expected cause.
    pub(crate) fn request_header_is_valid(&self, queue: usize) -> bool {
        let (wptr, rptr) = self.request_ring(queue).raw_pointers();
        let occupancy = (wptr + crate::layout::POINTER_WRAP - rptr) % crate::layout::POINTER_WRAP;
        occupancy <= CAPACITY as u32
    }

    /// Resets `queue`'s header pointers to zero (both rings empty). Used by
    /// the dispatcher to recover from an invalid header rather than treat it
    /// as unrecoverable.
    pub(crate) fn reinit_queue(&self, queue: usize) {
        let header = &self.headers[queue];
        use std::sync::atomic::Ordering;
        header.request_wptr.store(0, Ordering::Release);
        header.request_rptr.store(0, Ordering::Release);
        header.response_wptr.store(0, Ordering::Release);
        header.response_rptr.store(0, Ordering::Release);
    }

    /// Test hook impersonating the host: push a request onto `queue`.
    pub fn msgqueue_request_push(&self, queue: usize, req: Request) -> Result<(), RingError> {
        self.request_ring(queue).push(queue, req)
    }

    /// Test hook impersonating the host: pop a response from `queue`.
    pub fn msgqueue_response_pop(&self, queue: usize) -> Result<Response, RingError> {
        self.response_ring(queue).pop(queue)
    }
}

impl Default for QueueSet {
    fn default() -> Self {
        Self::new()
    }
}

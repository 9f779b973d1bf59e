//! Ring primitive: pointer arithmetic, empty/full tests, and push/pop of
//! fixed-size slots against a header the peer may concurrently mutate.
//!
//! # Memory ordering
//!
//! Each ring has exactly one writer of its `wptr` and exactly one writer of
//! its `rptr` — never the same side. Whichever side calls [`Ring::push`]
//! owns `wptr`; whichever side calls [`Ring::pop`] owns `rptr`. The protocol:
//!
//! - `push`: load own `wptr` (Relaxed — single writer), load peer `rptr`
//!   (Acquire — synchronizes with the peer's Release store when it last
//!   advanced `rptr`), write the slot, then store `wptr` (Release — publishes
//!   the slot write to whichever side reads it next).
//! - `pop`: load own `rptr` (Relaxed), load peer `wptr` (Acquire —
//!   synchronizes with the producer's Release store), read the slot, then
//!   store `rptr` (Release).
//!
//! A request ring is written by the host and read by the controller; a
//! response ring is written by the controller and read by the host. The ring
//! itself is symmetric — it only knows "the side that pushes" and "the side
//! that pops," which is why one `Ring` type serves both directions.
//!
//! Unlike the heap/stack ring buffers this is adapted from, pointers here are
//! explicit `u32` counters mod [`POINTER_WRAP`], not unbounded `u64` sequence
//! numbers — the host/controller wire contract fixes the pointer width and
//! wrap behavior, so there is no ABA-avoidance headroom to spend.

use crate::error::RingError;
use crate::invariants::{debug_assert_bounded_occupancy, debug_assert_monotonic_mod};
use crate::layout::{CAPACITY, POINTER_WRAP};
use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicU32, Ordering};

/// A single request or response ring: `CAPACITY` fixed-size slots of `T`,
/// indexed by a wptr/rptr pair living in the shared [`crate::layout::QueueHeader`].
///
/// `Ring` borrows its pointers and slot storage rather than owning them,
/// since both live inside the header / slot arrays that make up the wire
/// contract — see [`crate::queue_set::QueueSet`].
pub(crate) struct Ring<'a, T> {
    wptr: &'a AtomicU32,
    rptr: &'a AtomicU32,
    slots: &'a UnsafeCell<[T; CAPACITY]>,
}

// Safety: Ring is Send + Sync as long as T is Send. The push/pop protocol's
// Acquire/Release pairing on wptr/rptr is what makes concurrent access from
// the host and controller sides sound; see the module docs.
unsafe impl<T: Send> Send for Ring<'_, T> {}
unsafe impl<T: Send> Sync for Ring<'_, T> {}

impl<'a, T: Copy> Ring<'a, T> {
    pub(crate) fn new(
        wptr: &'a AtomicU32,
        rptr: &'a AtomicU32,
        slots: &'a UnsafeCell<[T; CAPACITY]>,
    ) -> Self {
        Self { wptr, rptr, slots }
    }

    /// Number of slots currently occupied, accounting for the mod-`POINTER_WRAP`
    /// counters (never negative, never more than `CAPACITY`).
    #[inline]
    fn occupancy(wptr: u32, rptr: u32) -> u32 {
        (wptr + POINTER_WRAP - rptr) % POINTER_WRAP
    }

    /// Writes `item` into the next slot and advances `wptr`.
    ///
    /// Fails with [`RingError::QueueFull`] — without modifying the ring —
    /// if occupancy has reached `CAPACITY`.
    pub(crate) fn push(&self, queue: usize, item: T) -> Result<(), RingError> {
        let wptr = self.wptr.load(Ordering::Relaxed);
        let rptr = self.rptr.load(Ordering::Acquire);

        let occupancy = Self::occupancy(wptr, rptr);
        debug_assert_bounded_occupancy!(occupancy, CAPACITY as u32);
        if occupancy == CAPACITY as u32 {
            return Err(RingError::QueueFull { queue });
        }

        let idx = (wptr % CAPACITY as u32) as usize;
        // SAFETY: idx < CAPACITY, and this slot is not in [rptr, wptr) so the
        // peer is not reading it. Only the push side writes slots; the
        // Release store below publishes this write to the peer's next
        // Acquire load of `wptr`.
        unsafe {
            (*self.slots.get())[idx] = item;
        }

        let new_wptr = (wptr + 1) % POINTER_WRAP;
        debug_assert_monotonic_mod!("wptr", wptr, new_wptr, POINTER_WRAP);
        self.wptr.store(new_wptr, Ordering::Release);
        Ok(())
    }

    /// Reads the next slot and advances `rptr`.
    ///
    /// Fails with [`RingError::QueueEmpty`] — a normal scan condition, not a
    /// fault — if `wptr == rptr`.
    pub(crate) fn pop(&self, queue: usize) -> Result<T, RingError> {
        let rptr = self.rptr.load(Ordering::Relaxed);
        let wptr = self.wptr.load(Ordering::Acquire);

        if wptr == rptr {
            return Err(RingError::QueueEmpty { queue });
        }

        let idx = (rptr % CAPACITY as u32) as usize;
        // SAFETY: idx < CAPACITY, and the Acquire load of `wptr` above
        // synchronizes with the push side's Release store, so the slot
        // write is visible here.
        let item = unsafe { (*self.slots.get())[idx] };

        let new_rptr = (rptr + 1) % POINTER_WRAP;
        debug_assert_monotonic_mod!("rptr", rptr, new_rptr, POINTER_WRAP);
        self.rptr.store(new_rptr, Ordering::Release);
        Ok(item)
    }

    /// `true` if `wptr == rptr` (no occupied slots).
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.wptr.load(Ordering::Relaxed) == self.rptr.load(Ordering::Relaxed)
    }

    /// Raw `(wptr, rptr)` pair, for header validation and diagnostics.
    #[inline]
    pub(crate) fn raw_pointers(&self) -> (u32, u32) {
        (
            self.wptr.load(Ordering::Relaxed),
            self.rptr.load(Ordering::Relaxed),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Request;

    fn make_ring() -> (AtomicU32, AtomicU32, UnsafeCell<[Request; CAPACITY]>) {
        (
            AtomicU32::new(0),
            AtomicU32::new(0),
            UnsafeCell::new([Request::ZERO; CAPACITY]),
        )
    }

    #[test]
    fn push_pop_round_trip() {
        let (wptr, rptr, slots) = make_ring();
        let ring = Ring::new(&wptr, &rptr, &slots);

        let mut req = Request::ZERO;
        req.data[0] = 0x7373_7373;
        ring.push(0, req).unwrap();

        let popped = ring.pop(0).unwrap();
        assert_eq!(popped.data[0], 0x7373_7373);
        assert!(ring.is_empty());
    }

    #[test]
    fn pop_empty_fails() {
        let (wptr, rptr, slots) = make_ring();
        let ring: Ring<'_, Request> = Ring::new(&wptr, &rptr, &slots);
        assert_eq!(ring.pop(2), Err(RingError::QueueEmpty { queue: 2 }));
    }

    #[test]
    fn push_to_capacity_then_full() {
        let (wptr, rptr, slots) = make_ring();
        let ring = Ring::new(&wptr, &rptr, &slots);

        for i in 0..CAPACITY as u32 {
            ring.push(1, Request { data: [i, 0, 0, 0, 0, 0, 0, 0] }).unwrap();
        }
        assert_eq!(
            ring.push(1, Request::ZERO),
            Err(RingError::QueueFull { queue: 1 })
        );

        // A full push must not have modified the ring.
        let (w, r) = ring.raw_pointers();
        assert_eq!(Ring::<Request>::occupancy(w, r), CAPACITY as u32);
    }

    #[test]
    fn wraps_around_pointer_space() {
        let (wptr, rptr, slots) = make_ring();
        let ring = Ring::new(&wptr, &rptr, &slots);

        // Push and pop enough times to wrap past POINTER_WRAP.
        for round in 0..3 {
            for i in 0..CAPACITY as u32 {
                ring.push(0, Request { data: [round * 10 + i, 0, 0, 0, 0, 0, 0, 0] })
                    .unwrap();
            }
            for i in 0..CAPACITY as u32 {
                let popped = ring.pop(0).unwrap();
                assert_eq!(popped.data[0], round * 10 + i);
            }
        }
        assert!(ring.is_empty());
    }

    #[test]
    fn fifo_order_preserved_under_interleaving() {
        let (wptr, rptr, slots) = make_ring();
        let ring = Ring::new(&wptr, &rptr, &slots);

        ring.push(0, Request { data: [1, 0, 0, 0, 0, 0, 0, 0] }).unwrap();
        ring.push(0, Request { data: [2, 0, 0, 0, 0, 0, 0, 0] }).unwrap();
        assert_eq!(ring.pop(0).unwrap().data[0], 1);
        ring.push(0, Request { data: [3, 0, 0, 0, 0, 0, 0, 0] }).unwrap();
        assert_eq!(ring.pop(0).unwrap().data[0], 2);
        assert_eq!(ring.pop(0).unwrap().data[0], 3);
    }
}

//! Shared-memory wire layout: the structures visible to both the host and
//! the controller.
//!
//! Everything in this module is `repr(C)` and laid out exactly as documented
//! in the external contract — byte offsets here are not an implementation
//! detail, they're part of what the host reads directly.

use std::sync::atomic::AtomicU32;

/// Number of independent request/response queue pairs in a queue set.
pub const NUM_QUEUES: usize = 4;

/// Slots per ring (request ring and response ring each have this many).
pub const CAPACITY: usize = 4;

/// Pointer modulus. Pointers are monotone counters mod `2 * CAPACITY`; the
/// slot index is the pointer mod `CAPACITY`. This is the double-width-counter
/// scheme that distinguishes empty (`wptr == rptr`) from full
/// (`wptr - rptr == CAPACITY`) without sacrificing a slot.
pub const POINTER_WRAP: u32 = 2 * CAPACITY as u32;

/// Words per request slot.
pub const REQUEST_WORDS: usize = 8;

/// Words per response slot.
pub const RESPONSE_WORDS: usize = 8;

/// One request slot: 8 little-endian u32 words. Word 0 bits `[7:0]` are the
/// command code; the rest is command-specific payload the dispatcher treats
/// as opaque.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub data: [u32; REQUEST_WORDS],
}

impl Request {
    /// The zero request (all words zero).
    pub const ZERO: Self = Self { data: [0; REQUEST_WORDS] };

    /// The command code in word 0, bits `[7:0]`.
    #[inline]
    #[must_use]
    pub const fn command_code(&self) -> u8 {
        (self.data[0] & 0xFF) as u8
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::ZERO
    }
}

/// One response slot: 8 little-endian u32 words. Word 0 bits `[7:0]` are the
/// echoed command code, bits `[15:8]` are the dispatcher-stamped status byte,
/// bits `[31:16]` are handler-defined; the remaining words are handler output.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub data: [u32; RESPONSE_WORDS],
}

impl Response {
    /// The zero response (all words zero) — what a handler receives to fill in.
    pub const ZERO: Self = Self { data: [0; RESPONSE_WORDS] };

    /// The echoed command code in word 0, bits `[7:0]`.
    #[inline]
    #[must_use]
    pub const fn command_code(&self) -> u8 {
        (self.data[0] & 0xFF) as u8
    }

    /// The status byte in word 0, bits `[15:8]`.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> u8 {
        ((self.data[0] >> 8) & 0xFF) as u8
    }

    /// Stamps the command-code echo and status byte into word 0, preserving
    /// bits `[31:16]` (handler-defined) as the handler left them.
    #[inline]
    pub(crate) fn stamp(&mut self, command_code: u8, status: u8) {
        let handler_bits = self.data[0] & 0xFFFF_0000;
        self.data[0] = handler_bits | (u32::from(status) << 8) | u32::from(command_code);
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::ZERO
    }
}

/// The 32-byte queue header shared between host and controller.
///
/// Host-written fields occupy the first 16 bytes, controller-written fields
/// the second 16 bytes. The split is deliberate: each side dirties only its
/// own cacheline, so neither writes back the other's half.
#[repr(C)]
pub struct QueueHeader {
    /// Host-owned: next slot index the host will write to (mod `POINTER_WRAP`).
    pub(crate) request_wptr: AtomicU32,
    /// Host-owned: next response slot index the host will read (mod `POINTER_WRAP`).
    pub(crate) response_rptr: AtomicU32,
    _reserved0: u32,
    _reserved1: u32,

    /// Controller-owned: next request slot index the controller will read.
    pub(crate) request_rptr: AtomicU32,
    /// Controller-owned: next slot index the controller will write to.
    pub(crate) response_wptr: AtomicU32,
    /// Controller-owned: monotonically advancing serial of the last response
    /// written, available to the host for liveness checks.
    pub(crate) last_serial: AtomicU32,
    _reserved2: u32,
}

impl QueueHeader {
    /// A fresh header: all pointers at zero (both rings empty).
    pub(crate) fn new() -> Self {
        Self {
            request_wptr: AtomicU32::new(0),
            response_rptr: AtomicU32::new(0),
            _reserved0: 0,
            _reserved1: 0,
            request_rptr: AtomicU32::new(0),
            response_wptr: AtomicU32::new(0),
            last_serial: AtomicU32::new(0),
            _reserved2: 0,
        }
    }
}

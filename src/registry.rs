//! Maps an 8-bit command code to a handler function.
//!
//! Handlers are stored as `AtomicPtr<()>` so that `register` can be called
//! concurrently with a running dispatch loop — aligned pointer-sized stores
//! are atomic on every target architecture this dispatcher runs on, which is
//! the only concurrency guarantee `register` needs. In practice all
//! registration happens before the first scan pass.

use crate::layout::{Request, Response};
use std::sync::atomic::{AtomicPtr, Ordering};

/// A stateless handler: given a request and a zeroed response to fill in,
/// returns an 8-bit status code (`0` means success).
pub type Handler = fn(&Request, &mut Response) -> u8;

const SLOT_COUNT: usize = 256;

/// The command-code → handler map. One slot per possible command code.
pub struct Registry {
    slots: [AtomicPtr<()>; SLOT_COUNT],
}

impl Registry {
    /// An empty registry: no command code has a handler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [const { AtomicPtr::new(std::ptr::null_mut()) }; SLOT_COUNT],
        }
    }

    /// Builds a registry from a static `(code, handler)` list, the
    /// compile-time-registration equivalent for targets without a
    /// linker-gathered section. Duplicate codes in `statics` are
    /// last-writer-wins; a duplicate is logged at `warn` since it is
    /// expected to indicate a programming error, not a supported pattern.
    #[must_use]
    pub fn with_static_handlers(statics: &[(u8, Handler)]) -> Self {
        let registry = Self::new();
        for &(code, handler) in statics {
            if registry.lookup(code).is_some() {
                tracing::warn!(code, "duplicate static handler registration, overwriting");
            }
            registry.register(code, handler);
        }
        registry
    }

    /// Installs `handler` at `code`, replacing any handler already there.
    pub fn register(&self, code: u8, handler: Handler) {
        let ptr = handler as *mut ();
        self.slots[code as usize].store(ptr, Ordering::Release);
    }

    /// Returns the handler installed at `code`, if any.
    #[must_use]
    pub fn lookup(&self, code: u8) -> Option<Handler> {
        let ptr = self.slots[code as usize].load(Ordering::Acquire);
        if ptr.is_null() {
            return None;
        }
        // SAFETY: the only pointers ever stored here come from `register`,
        // which stores a `Handler` cast to `*mut ()`; the cast back is exact.
        Some(unsafe { std::mem::transmute::<*mut (), Handler>(ptr) })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

//! Debug assertion macros for ring buffer invariants.
//!
//! These check the invariants documented in `spec.md` §3 (I1–I5). They are
//! only active in debug builds (`debug_assert!`), so there is zero overhead
//! in release builds.

/// I1 / I2: a controller-owned pointer (`request_rptr`, `response_wptr`)
/// only ever advances, mod `POINTER_WRAP`.
macro_rules! debug_assert_monotonic_mod {
    ($name:literal, $old:expr, $new:expr, $wrap:expr) => {
        debug_assert!(
            $new == ($old + 1) % $wrap,
            "{} did not advance by exactly one slot mod {}: {} -> {}",
            $name,
            $wrap,
            $old,
            $new
        )
    };
}

/// I4: `request_rptr <= request_wptr` and `response_wptr <= response_rptr + CAPACITY`,
/// expressed via the wrap-aware occupancy (`count <= CAPACITY`) that both
/// reduce to.
macro_rules! debug_assert_bounded_occupancy {
    ($count:expr, $capacity:expr) => {
        debug_assert!(
            $count <= $capacity,
            "INV-I4 violated: ring occupancy {} exceeds capacity {}",
            $count,
            $capacity
        )
    };
}

/// I5: the status-stamped response's command-code echo must equal the
/// request's command code.
macro_rules! debug_assert_status_echo {
    ($request_code:expr, $response_code:expr) => {
        debug_assert_eq!(
            $request_code, $response_code,
            "INV-I5 violated: response echoed command code {} but request was {}",
            $response_code, $request_code
        )
    };
}

pub(crate) use debug_assert_bounded_occupancy;
pub(crate) use debug_assert_monotonic_mod;
pub(crate) use debug_assert_status_echo;

//! The poll-driven scan-and-drain loop.

use crate::error::RingError;
use crate::invariants::debug_assert_status_echo;
use crate::layout::{Response, NUM_QUEUES};
use crate::metrics::Metrics;
use crate::queue_set::QueueSet;
use crate::registry::Registry;
use crate::status::STATUS_SCRATCH_ONLY;

/// Owns everything `scan` needs: the shared queue state, the handler table,
/// and dispatch counters.
pub struct Dispatcher {
    queues: QueueSet,
    registry: Registry,
    metrics: Metrics,
}

impl Dispatcher {
    /// Builds a dispatcher over a fresh [`QueueSet`], merging in a static
    /// handler list the way `init_msgqueue()` would at boot.
    #[must_use]
    pub fn new(static_handlers: &[(u8, crate::registry::Handler)]) -> Self {
        Self {
            queues: QueueSet::new(),
            registry: Registry::with_static_handlers(static_handlers),
            metrics: Metrics::new(),
        }
    }

    /// The queue set this dispatcher drains — used by tests to impersonate
    /// the host via `msgqueue_request_push`/`msgqueue_response_pop`.
    #[must_use]
    pub fn queues(&self) -> &QueueSet {
        &self.queues
    }

    /// Dispatch counters accumulated across all scan passes.
    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Registers `handler` for `code` at run time. Safe to call before the
    /// first scan pass; calling it while a scan is in flight relies on the
    /// platform's atomic pointer-store guarantee (see [`crate::registry`]).
    pub fn register_handler(&self, code: u8, handler: crate::registry::Handler) {
        self.registry.register(code, handler);
    }

    /// Runs one scan pass: for each queue in ascending order, drain all
    /// pending requests in FIFO order, dispatch each to its handler (or
    /// stamp `SCRATCH_ONLY` if none is registered), and push the response.
    ///
    /// Never panics and never leaves a popped request without a response —
    /// a `QueueFull` on `response_push` is logged and the response dropped
    /// rather than propagated, since host discipline (don't submit request
    /// N+1 before reading response N) makes it unreachable in practice.
    pub fn scan(&self) {
        for queue in 0..NUM_QUEUES {
            if !self.queues.request_header_is_valid(queue) {
                tracing::error!(queue, "invalid request queue header, reinitializing");
                self.queues.reinit_queue(queue);
                continue;
            }

            loop {
                let request = match self.queues.request_ring(queue).pop(queue) {
                    Ok(request) => request,
                    Err(RingError::QueueEmpty { .. }) => break,
                    Err(RingError::QueueFull { .. }) => unreachable!("pop never returns QueueFull"),
                };

                let command_code = request.command_code();
                let mut response = Response::ZERO;

                let status = match self.registry.lookup(command_code) {
                    Some(handler) => {
                        let status = handler(&request, &mut response);
                        if status == 0 {
                            self.metrics.record_dispatched(queue);
                        } else {
                            self.metrics.record_handler_error(queue);
                        }
                        status
                    }
                    None => {
                        self.metrics.record_unknown_code(queue);
                        STATUS_SCRATCH_ONLY
                    }
                };

                response.stamp(command_code, status);
                debug_assert_status_echo!(command_code, response.command_code());

                if let Err(RingError::QueueFull { queue }) =
                    self.queues.response_ring(queue).push(queue, response)
                {
                    tracing::warn!(queue, command_code, "response queue full, dropping response");
                    self.metrics.record_response_queue_full(queue);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Request;

    fn echo_handler(req: &Request, rsp: &mut Response) -> u8 {
        rsp.data[1] = req.data[0];
        0
    }

    fn set_voltage_handler(_req: &Request, _rsp: &mut Response) -> u8 {
        0
    }

    #[test]
    fn s1_echo_round_trip() {
        let dispatcher = Dispatcher::new(&[(0x73, echo_handler)]);
        let req = Request { data: [0x7373_7373, 0, 0, 0, 0, 0, 0, 0] };
        dispatcher.queues().msgqueue_request_push(0, req).unwrap();

        dispatcher.scan();

        let rsp = dispatcher.queues().msgqueue_response_pop(0).unwrap();
        assert_eq!(rsp.data[1], 0x7373_7373);
        assert_eq!(rsp.command_code(), 0x73);
        assert_eq!(rsp.status(), 0);
    }

    #[test]
    fn s2_unknown_code_yields_scratch_only() {
        let dispatcher = Dispatcher::new(&[]);
        let req = Request { data: [0x42, 0, 0, 0, 0, 0, 0, 0] };
        dispatcher.queues().msgqueue_request_push(0, req).unwrap();

        dispatcher.scan();

        let rsp = dispatcher.queues().msgqueue_response_pop(0).unwrap();
        assert_eq!(rsp.status(), STATUS_SCRATCH_ONLY);
    }

    #[test]
    fn s3_fifth_push_fails_without_modifying_ring() {
        let dispatcher = Dispatcher::new(&[]);
        for i in 0..4 {
            let req = Request { data: [i, 0, 0, 0, 0, 0, 0, 0] };
            dispatcher.queues().msgqueue_request_push(0, req).unwrap();
        }
        let overflow = Request::ZERO;
        assert_eq!(
            dispatcher.queues().msgqueue_request_push(0, overflow),
            Err(RingError::QueueFull { queue: 0 })
        );
    }

    #[test]
    fn s4_set_voltage_succeeds() {
        let dispatcher = Dispatcher::new(&[(crate::commands::SET_VOLTAGE, set_voltage_handler)]);
        let req = Request {
            data: [
                u32::from(crate::commands::SET_VOLTAGE) | (0x64 << 8) | (800 << 16),
                0,
                0,
                0,
                0,
                0,
                0,
                0,
            ],
        };
        dispatcher.queues().msgqueue_request_push(0, req).unwrap();
        dispatcher.scan();
        let rsp = dispatcher.queues().msgqueue_response_pop(0).unwrap();
        assert_eq!(rsp.status(), 0);
    }

    #[test]
    fn s5_cross_queue_ordering_is_independent() {
        let dispatcher = Dispatcher::new(&[(0x73, echo_handler)]);

        let a = Request { data: [0x73, 1, 0, 0, 0, 0, 0, 0] };
        let b = Request { data: [0x73, 2, 0, 0, 0, 0, 0, 0] };
        let a_prime = Request { data: [0x73, 3, 0, 0, 0, 0, 0, 0] };

        dispatcher.queues().msgqueue_request_push(0, a).unwrap();
        dispatcher.queues().msgqueue_request_push(1, b).unwrap();
        dispatcher.queues().msgqueue_request_push(0, a_prime).unwrap();

        dispatcher.scan();

        assert_eq!(dispatcher.queues().msgqueue_response_pop(0).unwrap().data[1], 1);
        assert_eq!(dispatcher.queues().msgqueue_response_pop(0).unwrap().data[1], 3);
        assert_eq!(dispatcher.queues().msgqueue_response_pop(1).unwrap().data[1], 2);
    }

    #[test]
    fn s6_interleaved_push_and_scan_preserves_fifo() {
        let dispatcher = Dispatcher::new(&[(0x73, echo_handler)]);

        let push = |tag: u32| {
            dispatcher
                .queues()
                .msgqueue_request_push(0, Request { data: [0x73, tag, 0, 0, 0, 0, 0, 0] })
                .unwrap();
        };

        push(1);
        dispatcher.scan();
        push(2);
        push(3);
        dispatcher.scan();

        assert_eq!(dispatcher.queues().msgqueue_response_pop(0).unwrap().data[1], 1);
        assert_eq!(dispatcher.queues().msgqueue_response_pop(0).unwrap().data[1], 2);
        assert_eq!(dispatcher.queues().msgqueue_response_pop(0).unwrap().data[1], 3);
    }

    #[test]
    fn handler_error_status_passes_through_verbatim() {
        fn always_fails(_req: &Request, _rsp: &mut Response) -> u8 {
            0x07
        }
        let dispatcher = Dispatcher::new(&[(0x01, always_fails)]);
        dispatcher
            .queues()
            .msgqueue_request_push(0, Request { data: [0x01, 0, 0, 0, 0, 0, 0, 0] })
            .unwrap();
        dispatcher.scan();
        let rsp = dispatcher.queues().msgqueue_response_pop(0).unwrap();
        assert_eq!(rsp.status(), 0x07);
    }

    #[test]
    fn metrics_track_dispatched_and_unknown_separately() {
        let dispatcher = Dispatcher::new(&[(0x73, echo_handler)]);
        dispatcher
            .queues()
            .msgqueue_request_push(0, Request { data: [0x73, 0, 0, 0, 0, 0, 0, 0] })
            .unwrap();
        dispatcher
            .queues()
            .msgqueue_request_push(0, Request { data: [0x42, 0, 0, 0, 0, 0, 0, 0] })
            .unwrap();
        dispatcher.scan();

        let snapshot = dispatcher.metrics().snapshot(0);
        assert_eq!(snapshot.dispatched, 1);
        assert_eq!(snapshot.unknown_code, 1);
    }
}

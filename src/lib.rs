//! Host↔controller message queue dispatcher.
//!
//! A host CPU and an on-die management controller share a small region of
//! memory laid out as a fixed number of request/response ring buffers (see
//! [`layout`]). The host writes command requests; [`Dispatcher::scan`] drains
//! them, routes each to a handler registered by command code ([`registry`]),
//! and writes a response back with a status byte stamped in ([`status`]).
//!
//! There is no interrupt-driven wakeup: `scan` is meant to be called
//! repeatedly by a platform main loop. It never blocks and never panics.
//!
//! ```
//! use tt_smc_msgqueue::{commands, Dispatcher, Request};
//!
//! fn set_voltage(_req: &Request, _rsp: &mut tt_smc_msgqueue::Response) -> u8 {
//!     0
//! }
//!
//! let dispatcher = Dispatcher::new(&[(commands::SET_VOLTAGE, set_voltage)]);
//!
//! let req = Request { data: [u32::from(commands::SET_VOLTAGE), 0, 0, 0, 0, 0, 0, 0] };
//! dispatcher.queues().msgqueue_request_push(0, req).unwrap();
//!
//! dispatcher.scan();
//!
//! let rsp = dispatcher.queues().msgqueue_response_pop(0).unwrap();
//! assert_eq!(rsp.status(), 0);
//! ```

mod dispatcher;
mod error;
mod invariants;
mod layout;
mod metrics;
mod queue_set;
mod registry;
mod ring;

pub mod commands;
pub mod status;

pub use dispatcher::Dispatcher;
pub use error::{DispatchError, RingError};
pub use layout::{
    QueueHeader, Request, Response, CAPACITY, NUM_QUEUES, POINTER_WRAP, REQUEST_WORDS,
    RESPONSE_WORDS,
};
pub use metrics::{Metrics, QueueMetricsSnapshot};
pub use queue_set::QueueSet;
pub use registry::{Handler, Registry};

//! Failover retry subsystem.
//!
//! # Data Flow
//! ```text
//! execute(descriptor):
//!     → hosts.for_operation(kind)        (priority order, never shuffled)
//!     → per host: eligibility check      (health registry)
//!     → transport.send(host, descriptor)
//!     → outcome classification:
//!         Success   → mark up, decode, return
//!         Empty     → return absent (404)
//!         Fatal     → return error immediately (4xx)
//!         Retryable → mark down, record cause, next host (5xx/transport)
//!     → list exhausted → aggregate error with every recorded cause
//! ```
//!
//! # Design Decisions
//! - Hosts are tried strictly in order within one call; concurrency exists
//!   only across calls, which share the health registry
//! - Classification is a pure function over the response, kept separate
//!   from the host-iteration loop

pub mod dispatcher;
pub mod outcome;

pub use dispatcher::Dispatcher;
pub use outcome::Outcome;

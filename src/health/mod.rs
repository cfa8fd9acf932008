//! Host health subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher attempt:
//!     → registry.is_eligible(host, now)   (skip host if false)
//!     → transport call
//!     → On transport/5xx failure: registry.mark_down(host, now)
//!     → On 2xx for a tracked host: registry.mark_up(host, now)
//! ```
//!
//! # Design Decisions
//! - No entry means healthy; entries are created on first failure only
//! - An elapsed down timeout makes a host eligible again but does not flip
//!   its recorded state; only a real attempt does
//! - Health is a best-effort hint shared by all in-flight calls;
//!   last-writer-wins per host entry

pub mod clock;
pub mod registry;

pub use clock::{Clock, SystemClock};
pub use registry::{HealthRegistry, HostStatus};

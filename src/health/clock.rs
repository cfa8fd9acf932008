//! Injected time source.
//!
//! The registry never calls `Instant::now()` itself; the clock is a
//! constructor argument so down-timeout behavior is testable with a
//! manually advanced clock.

use std::time::Instant;

/// Source of "now" for health bookkeeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time; the production clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

//! Host health registry.
//!
//! # States
//! - Up: host receives traffic
//! - Down: host skipped until its down timeout elapses
//!
//! # State Transitions
//! ```text
//! (no entry) → Down: retryable failure observed
//! Down → Up: attempt succeeds after the down timeout elapsed
//! ```
//!
//! An elapsed timeout only restores *eligibility*; the stored state stays
//! Down until an actual attempt succeeds.

use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Last observed health of one host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostStatus {
    pub is_up: bool,
    /// Time of the last up/down transition.
    pub last_changed: Instant,
}

/// Shared map of host → last-known health.
///
/// One registry lives for the lifetime of the client and is read and
/// written by every in-flight dispatch call. All operations are
/// constant-time and non-blocking.
#[derive(Debug)]
pub struct HealthRegistry {
    statuses: DashMap<String, HostStatus>,
    down_timeout: Duration,
}

impl HealthRegistry {
    pub fn new(down_timeout: Duration) -> Self {
        Self {
            statuses: DashMap::new(),
            down_timeout,
        }
    }

    /// Whether the dispatcher may attempt this host.
    ///
    /// True if the host was never tracked, is up, or has been down for
    /// longer than the down timeout.
    pub fn is_eligible(&self, host: &str, now: Instant) -> bool {
        match self.statuses.get(host) {
            None => true,
            Some(status) => {
                status.is_up
                    || now.saturating_duration_since(status.last_changed) > self.down_timeout
            }
        }
    }

    /// Record a retryable failure for this host.
    pub fn mark_down(&self, host: &str, now: Instant) {
        self.statuses.insert(
            host.to_string(),
            HostStatus {
                is_up: false,
                last_changed: now,
            },
        );
    }

    /// Record a successful attempt for this host.
    pub fn mark_up(&self, host: &str, now: Instant) {
        self.statuses.insert(
            host.to_string(),
            HostStatus {
                is_up: true,
                last_changed: now,
            },
        );
    }

    /// Whether this host has ever had a health transition recorded.
    pub fn is_tracked(&self, host: &str) -> bool {
        self.statuses.contains_key(host)
    }

    /// Last recorded status for a host, if any.
    pub fn status(&self, host: &str) -> Option<HostStatus> {
        self.statuses.get(host).map(|entry| *entry)
    }
}

//! Host-failover dispatch loop.
//!
//! # Responsibilities
//! - Walk the priority host list for the request's operation kind
//! - Skip hosts inside their down-timeout window
//! - Classify each attempt and update the health registry
//! - Aggregate retryable causes into one error when the list is exhausted

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::health::{Clock, HealthRegistry};
use crate::hosts::HostLists;
use crate::request::RequestDescriptor;
use crate::retry::outcome::{classify, Outcome};
use crate::transport::Transport;

/// Drives one request through the host list until it succeeds, fails
/// fatally, or every eligible host has failed retryably.
#[derive(Debug)]
pub struct Dispatcher<T, C> {
    transport: T,
    clock: C,
    hosts: HostLists,
    registry: HealthRegistry,
}

impl<T: Transport, C: Clock> Dispatcher<T, C> {
    pub fn new(transport: T, clock: C, hosts: HostLists, down_timeout: Duration) -> Self {
        Self {
            transport,
            clock,
            hosts,
            registry: HealthRegistry::new(down_timeout),
        }
    }

    /// The shared health registry consulted before every attempt.
    pub fn registry(&self) -> &HealthRegistry {
        &self.registry
    }

    /// Deliver the request to the first host that answers.
    ///
    /// Returns `Ok(None)` for a 404 (absent result). Retryable failures
    /// (transport errors and 5xx) advance to the next host; any other 4xx
    /// stops immediately.
    pub async fn execute<R>(&self, request: &RequestDescriptor) -> Result<Option<R>, ClientError>
    where
        R: DeserializeOwned,
    {
        // host → cause, in attempt order; skipped hosts are never recorded.
        let mut failures: Vec<(&str, String)> = Vec::new();

        for host in self.hosts.for_operation(request.operation) {
            if !self.registry.is_eligible(host, self.clock.now()) {
                tracing::debug!(host = %host, "skipping host, down timeout not elapsed");
                continue;
            }

            let response = match self.transport.send(host, request).await {
                Ok(response) => response,
                Err(error) => {
                    tracing::warn!(host = %host, error = %error, "transport failure, trying next host");
                    self.registry.mark_down(host, self.clock.now());
                    failures.push((host.as_str(), error.to_string()));
                    continue;
                }
            };

            match classify(response) {
                Outcome::Success(body) => {
                    if self.registry.is_tracked(host) {
                        self.registry.mark_up(host, self.clock.now());
                    }
                    return Ok(Some(serde_json::from_str(&body)?));
                }
                Outcome::Empty => return Ok(None),
                Outcome::Fatal(error) => {
                    tracing::debug!(host = %host, error = %error, "fatal response, not retrying");
                    return Err(error);
                }
                Outcome::Retryable(cause) => {
                    tracing::warn!(host = %host, cause = %cause, "server failure, trying next host");
                    self.registry.mark_down(host, self.clock.now());
                    failures.push((host.as_str(), cause));
                }
            }
        }

        Err(ClientError::RetriesExhausted {
            message: exhaustion_message(&failures),
        })
    }
}

fn exhaustion_message(failures: &[(&str, String)]) -> String {
    let entries: Vec<String> = failures
        .iter()
        .map(|(host, cause)| format!("Failed to query host [{host}]: {cause}"))
        .collect();
    format!("All retries failed, exceptions: [{}]", entries.join(","))
}

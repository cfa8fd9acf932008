//! Client facade.
//!
//! Owns the configuration, the transport, the clock and the failover
//! dispatcher. Construct one per application and share it; the health
//! registry inside is meant to accumulate observations across every
//! request the process makes.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::health::{Clock, HealthRegistry, SystemClock};
use crate::request::RequestDescriptor;
use crate::retry::Dispatcher;
use crate::transport::{HttpTransport, Transport};

/// Failover client for a replicated search service.
#[derive(Debug)]
pub struct SearchClient<T = HttpTransport, C = SystemClock> {
    dispatcher: Dispatcher<T, C>,
}

impl SearchClient {
    /// Production client: HTTPS transport and wall-clock time.
    pub fn new(config: ClientConfig) -> Self {
        let transport = HttpTransport::new(&config);
        Self::with_transport(config, transport, SystemClock)
    }
}

impl<T: Transport, C: Clock> SearchClient<T, C> {
    /// Client with an injected transport and clock.
    pub fn with_transport(config: ClientConfig, transport: T, clock: C) -> Self {
        let hosts = config.host_lists();
        let down_timeout = Duration::from_millis(config.host_down_timeout_ms);
        Self {
            dispatcher: Dispatcher::new(transport, clock, hosts, down_timeout),
        }
    }

    /// Execute one request with host failover.
    ///
    /// `Ok(None)` means the service answered 404: the operation was valid
    /// but nothing is there.
    pub async fn execute<R>(&self, request: &RequestDescriptor) -> Result<Option<R>, ClientError>
    where
        R: DeserializeOwned,
    {
        self.dispatcher.execute(request).await
    }

    /// Host health observed so far.
    pub fn health(&self) -> &HealthRegistry {
        self.dispatcher.registry()
    }
}

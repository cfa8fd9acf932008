//! Shared test doubles: a scripted transport and a manually advanced clock.

use std::collections::VecDeque;
use std::ops::Deref;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use search_client::health::Clock;
use search_client::request::RequestDescriptor;
use search_client::transport::{HttpResponse, Transport, TransportError};
use search_client::{ClientConfig, SearchClient};

/// Transport that replays a queue of scripted outcomes and records the
/// hosts it was asked to contact, in order.
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    attempted: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(outcomes: Vec<Result<HttpResponse, TransportError>>) -> SharedTransport {
        SharedTransport(Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            attempted: Mutex::new(Vec::new()),
        }))
    }

    pub fn attempted_hosts(&self) -> Vec<String> {
        self.attempted.lock().unwrap().clone()
    }

    pub fn push(&self, outcome: Result<HttpResponse, TransportError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }
}

/// Cloneable handle to a [`ScriptedTransport`]; the handle is what the
/// client owns, so tests keep a second handle to inspect the recorder.
#[derive(Clone)]
pub struct SharedTransport(Arc<ScriptedTransport>);

impl Deref for SharedTransport {
    type Target = ScriptedTransport;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Transport for SharedTransport {
    async fn send(
        &self,
        host: &str,
        _request: &RequestDescriptor,
    ) -> Result<HttpResponse, TransportError> {
        self.0.attempted.lock().unwrap().push(host.to_string());
        self.0
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more times than scripted")
    }
}

/// Clock that only moves when the test advances it.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<Instant>>);

impl ManualClock {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(Instant::now())))
    }

    pub fn advance(&self, by: Duration) {
        *self.0.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.0.lock().unwrap()
    }
}

pub fn response(status: u16, body: &str) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status,
        body: body.to_string(),
    })
}

pub fn connect_refused() -> Result<HttpResponse, TransportError> {
    Err(TransportError::Connect("connection refused".to_string()))
}

pub fn query_hosts() -> Vec<String> {
    vec![
        "app-dsn.searchgrid.net".to_string(),
        "app-1.searchgridnet.com".to_string(),
        "app-2.searchgridnet.com".to_string(),
        "app-3.searchgridnet.com".to_string(),
    ]
}

pub fn build_hosts() -> Vec<String> {
    vec![
        "app.searchgrid.net".to_string(),
        "app-1.searchgridnet.com".to_string(),
        "app-2.searchgridnet.com".to_string(),
        "app-3.searchgridnet.com".to_string(),
    ]
}

/// Client over a scripted transport with a 1000ms host down timeout,
/// mirroring the production wiring minus the real network.
pub fn scripted_client(
    query: Vec<String>,
    build: Vec<String>,
    transport: SharedTransport,
    clock: ManualClock,
) -> SearchClient<SharedTransport, ManualClock> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "search_client=debug".into()),
        )
        .with_test_writer()
        .try_init();

    let config = ClientConfig {
        application_id: "app".to_string(),
        api_key: "key".to_string(),
        query_hosts: query,
        build_hosts: build,
        host_down_timeout_ms: 1000,
        ..Default::default()
    };
    SearchClient::with_transport(config, transport, clock)
}


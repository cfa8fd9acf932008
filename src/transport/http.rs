//! Production transport over reqwest.
//!
//! # Responsibilities
//! - Assemble the request URL from host and path segments
//! - Attach credential headers and the JSON body
//! - Enforce the per-request timeout
//!
//! # Design Decisions
//! - One pooled `reqwest::Client` per transport, reused across hosts
//! - Timeouts and connection errors map to distinct `TransportError`
//!   variants so the failure cause in logs names what actually happened

use std::time::Duration;

use url::Url;

use crate::config::ClientConfig;
use crate::request::{Method, RequestDescriptor};
use crate::transport::{HttpResponse, Transport, TransportError};

const APPLICATION_ID_HEADER: &str = "X-Application-Id";
const API_KEY_HEADER: &str = "X-API-Key";

/// HTTPS transport carrying the client credentials.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    application_id: String,
    api_key: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            application_id: config.application_id.clone(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_millis(config.request_timeout_ms),
        }
    }

    fn url(&self, host: &str, request: &RequestDescriptor) -> Result<Url, TransportError> {
        let url = format!("https://{}/{}", host, request.path.join("/"));
        Ok(Url::parse(&url)?)
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        host: &str,
        request: &RequestDescriptor,
    ) -> Result<HttpResponse, TransportError> {
        let url = self.url(host, request)?;

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        builder = builder
            .header(APPLICATION_ID_HEADER, &self.application_id)
            .header(API_KEY_HEADER, &self.api_key)
            .timeout(self.timeout);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(classify_reqwest)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_reqwest)?;

        Ok(HttpResponse { status, body })
    }
}

fn classify_reqwest(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else {
        TransportError::Http(error)
    }
}

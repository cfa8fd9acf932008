//! Transport seam between the dispatcher and the wire.
//!
//! # Responsibilities
//! - Define the one capability the dispatcher needs: send a descriptor to a
//!   named host, get back a status code and a single-read body
//! - Distinguish transport-level failures (no HTTP response at all) from
//!   HTTP responses, which the dispatcher classifies itself
//!
//! # Design Decisions
//! - `Transport` is a trait so tests script outcomes without sockets
//! - Transport errors carry a displayable cause; the dispatcher records it
//!   for the aggregate failure message

use std::future::Future;

use thiserror::Error;

use crate::request::RequestDescriptor;

pub mod http;

pub use http::HttpTransport;

/// A raw HTTP response: status plus a fully read body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Failure to obtain any HTTP response from a host.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Delivers one request to one host.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        host: &str,
        request: &RequestDescriptor,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

//! Client-facing error definitions.
//!
//! # Design Decisions
//! - 4xx statuses are not retryable; the request itself is wrong, so another
//!   host cannot answer it better
//! - 404 is not an error at all (absent result), so it has no variant here
//! - Transport and 5xx causes never surface individually; they are folded
//!   into the `RetriesExhausted` message once every host has failed

use thiserror::Error;

/// Errors surfaced by [`execute`](crate::client::SearchClient::execute).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service rejected the request as malformed (HTTP 400).
    #[error("Bad build request")]
    BadRequest,

    /// Credentials were rejected (HTTP 403).
    #[error("Invalid Application-ID or API-Key")]
    Forbidden,

    /// Any other 4xx status.
    #[error("Error")]
    Unknown,

    /// Every eligible host failed with a retryable cause.
    ///
    /// The message aggregates each per-host cause in attempt order.
    #[error("{message}")]
    RetriesExhausted { message: String },

    /// A 2xx response body could not be decoded into the requested type.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

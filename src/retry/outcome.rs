//! HTTP outcome classification.
//!
//! # Classification Policy
//! ```text
//! 2xx        → Success (parse body)
//! 404        → Empty (absent result, not an error)
//! 400        → Fatal: bad request
//! 403        → Fatal: invalid credentials
//! other 4xx  → Fatal: generic error
//! anything else → Retryable (treated like a transport failure)
//! ```
//!
//! Fatal means the request itself is wrong; trying another host cannot
//! change the answer. 404 is a legitimate "not present" answer for
//! idempotent lookups, so it neither errors nor marks the host down.

use serde::Deserialize;

use crate::error::ClientError;
use crate::transport::HttpResponse;

/// Result of one host attempt, before error propagation is decided.
#[derive(Debug)]
pub enum Outcome {
    /// 2xx; carries the undecoded body.
    Success(String),
    /// 404; the operation is valid but nothing was found.
    Empty,
    /// 4xx other than 404; stop without trying further hosts.
    Fatal(ClientError),
    /// 5xx or non-HTTP-shaped status; try the next host, record the cause.
    Retryable(String),
}

/// Error bodies carry a human-readable message field.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Classify a response by status code.
pub fn classify(response: HttpResponse) -> Outcome {
    match response.status {
        200..=299 => Outcome::Success(response.body),
        404 => Outcome::Empty,
        400 => Outcome::Fatal(ClientError::BadRequest),
        403 => Outcome::Fatal(ClientError::Forbidden),
        status @ 400..=499 => {
            if let Ok(body) = serde_json::from_str::<ErrorBody>(&response.body) {
                if let Some(message) = body.message {
                    tracing::debug!(status, message = %message, "client error from service");
                }
            }
            Outcome::Fatal(ClientError::Unknown)
        }
        status => Outcome::Retryable(format!("host returned status {status}")),
    }
}

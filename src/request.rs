//! Request descriptors.
//!
//! A descriptor carries everything the dispatcher needs to deliver one
//! logical operation: the verb, the operation kind (which selects the host
//! list), the path segments and an optional JSON body. The decoded result
//! type is chosen by the caller at the `execute` call site.

use serde_json::Value;

/// HTTP verb for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Classifies a request as a read (query) or an indexing operation (build).
///
/// The two kinds use different host priority lists: query traffic goes to
/// the DSN tier first, build traffic to the primary host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Query,
    Build,
}

/// One logical request to the search service.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub operation: Operation,
    /// Path components, joined in order; opaque to the dispatcher.
    pub path: Vec<String>,
    /// Optional JSON payload.
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn new<I, S>(method: Method, operation: Operation, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            operation,
            path: path.into_iter().map(Into::into).collect(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

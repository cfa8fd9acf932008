//! Client configuration.
//!
//! All types derive Serde traits so a configuration can be loaded from a
//! file or built in code. Defaults match production service conventions.

use serde::{Deserialize, Serialize};

use crate::hosts::HostLists;

/// Configuration for a [`SearchClient`](crate::client::SearchClient).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Application identifier; also the leading label of derived host names.
    pub application_id: String,

    /// API key sent with every request.
    pub api_key: String,

    /// Domain of the primary hosts (e.g. "searchgrid.net").
    pub primary_domain: String,

    /// Domain of the fallback hosts (e.g. "searchgridnet.com").
    pub fallback_domain: String,

    /// Explicit query host list. Empty means derive from `application_id`.
    pub query_hosts: Vec<String>,

    /// Explicit build host list. Empty means derive from `application_id`.
    pub build_hosts: Vec<String>,

    /// How long a host stays ineligible after being marked down.
    pub host_down_timeout_ms: u64,

    /// Per-request timeout at the transport layer.
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            application_id: String::new(),
            api_key: String::new(),
            primary_domain: "searchgrid.net".to_string(),
            fallback_domain: "searchgridnet.com".to_string(),
            query_hosts: Vec::new(),
            build_hosts: Vec::new(),
            host_down_timeout_ms: 5 * 60 * 1000,
            request_timeout_ms: 30_000,
        }
    }
}

impl ClientConfig {
    pub fn new(application_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Resolve the host lists: explicit overrides win, otherwise both lists
    /// are derived from the application id by naming convention.
    pub fn host_lists(&self) -> HostLists {
        if !self.query_hosts.is_empty() || !self.build_hosts.is_empty() {
            HostLists::new(self.query_hosts.clone(), self.build_hosts.clone())
        } else {
            HostLists::for_application(
                &self.application_id,
                &self.primary_domain,
                &self.fallback_domain,
            )
        }
    }
}

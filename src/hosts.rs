//! Host list construction.
//!
//! # Responsibilities
//! - Derive the query and build host lists from an application id
//! - Preserve list order (order is the failover priority, never shuffled)
//!
//! # Design Decisions
//! - Query traffic prefers the DSN replica (`{app}-dsn.<primary>`); build
//!   traffic prefers the primary host (`{app}.<primary>`)
//! - Both kinds share the same numbered fallback hosts on a second domain,
//!   so a primary-domain outage still leaves three reachable hosts

use crate::request::Operation;

/// Number of numbered fallback hosts per list.
const FALLBACK_HOSTS: usize = 3;

/// Ordered query and build host lists for one client.
#[derive(Debug, Clone)]
pub struct HostLists {
    query: Vec<String>,
    build: Vec<String>,
}

impl HostLists {
    /// Build from explicit lists. Order is kept as given.
    pub fn new(query: Vec<String>, build: Vec<String>) -> Self {
        Self { query, build }
    }

    /// Derive both lists from the application id by naming convention.
    pub fn for_application(application_id: &str, primary: &str, fallback: &str) -> Self {
        let fallbacks =
            (1..=FALLBACK_HOSTS).map(|i| format!("{application_id}-{i}.{fallback}"));

        let query = std::iter::once(format!("{application_id}-dsn.{primary}"))
            .chain(fallbacks.clone())
            .collect();
        let build = std::iter::once(format!("{application_id}.{primary}"))
            .chain(fallbacks)
            .collect();

        Self { query, build }
    }

    /// The priority-ordered host list for an operation kind.
    pub fn for_operation(&self, operation: Operation) -> &[String] {
        match operation {
            Operation::Query => &self.query,
            Operation::Build => &self.build,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_hosts_prefer_dsn_replica() {
        let hosts = HostLists::for_application("APP_ID", "searchgrid.net", "searchgridnet.com");
        assert_eq!(
            hosts.for_operation(Operation::Query),
            [
                "APP_ID-dsn.searchgrid.net",
                "APP_ID-1.searchgridnet.com",
                "APP_ID-2.searchgridnet.com",
                "APP_ID-3.searchgridnet.com",
            ]
        );
    }

    #[test]
    fn build_hosts_prefer_primary() {
        let hosts = HostLists::for_application("APP_ID", "searchgrid.net", "searchgridnet.com");
        assert_eq!(
            hosts.for_operation(Operation::Build),
            [
                "APP_ID.searchgrid.net",
                "APP_ID-1.searchgridnet.com",
                "APP_ID-2.searchgridnet.com",
                "APP_ID-3.searchgridnet.com",
            ]
        );
    }

    #[test]
    fn explicit_lists_keep_given_order() {
        let hosts = HostLists::new(
            vec!["b.example".into(), "a.example".into()],
            vec!["c.example".into()],
        );
        assert_eq!(hosts.for_operation(Operation::Query), ["b.example", "a.example"]);
        assert_eq!(hosts.for_operation(Operation::Build), ["c.example"]);
    }
}

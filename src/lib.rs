//! Failover client core for a replicated search service.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                SEARCH CLIENT                  │
//!                  │                                               │
//!   execute(req)   │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!   ───────────────┼─▶│ request │───▶│  retry   │───▶│transport│──┼──▶ host 1..n
//!                  │  │  desc   │    │dispatcher│    │ (HTTPS) │  │
//!                  │  └─────────┘    └────┬─────┘    └─────────┘  │
//!                  │                      │                       │
//!                  │                      ▼                       │
//!                  │  ┌─────────┐    ┌──────────┐                 │
//!                  │  │  hosts  │    │  health  │                 │
//!                  │  │ (lists) │    │ registry │                 │
//!                  │  └─────────┘    └──────────┘                 │
//!                  └──────────────────────────────────────────────┘
//! ```
//!
//! A request names an operation kind (query or build), which selects a
//! priority-ordered host list. The dispatcher walks that list, skipping
//! hosts inside their down-timeout window, retrying transport failures and
//! 5xx answers against the next host, and failing fast on any other 4xx.
//! 404 is a first-class absent result, not an error.

// Core subsystems
pub mod client;
pub mod config;
pub mod request;
pub mod retry;
pub mod transport;

// Traffic management
pub mod health;
pub mod hosts;

// Cross-cutting concerns
pub mod error;

pub use client::SearchClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use hosts::HostLists;
pub use request::{Method, Operation, RequestDescriptor};

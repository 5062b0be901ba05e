//! Resolver Module
//!
//! Turns a NextDNS profile into the list of blocklist text URLs it enables,
//! and downloads those lists.
//!
//! # Components
//! - [`NextDnsResolver`]: talks to the NextDNS API and metadata repository
//! - [`CachedResolver`]: memoizes any resolver behind a [`TimedCache`](crate::cache::TimedCache)
//! - [`Aggregator`]: fetches and concatenates the resolved lists

mod aggregate;
mod cached;
mod nextdns;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, Result};

pub use aggregate::Aggregator;
pub use cached::CachedResolver;
pub use nextdns::NextDnsResolver;

// == Resolver Trait ==
/// Resolves a profile to the ordered list of its blocklist URLs.
#[async_trait]
pub trait BlocklistResolver: Send + Sync {
    async fn resolve(&self, configuration_id: &str, api_key: &str) -> Result<Vec<String>>;
}

/// Builds the HTTP client shared by the resolver and the aggregator.
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))
}

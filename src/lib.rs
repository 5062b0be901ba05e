//! Blocklist Aggregator - NextDNS profile blocklists as one plain-text list
//!
//! Resolving a profile's blocklists is slow and rate-limited, so resolutions
//! are memoized with an expiring cache that is dropped wholesale once its
//! window elapses.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;

pub use api::AppState;
pub use cache::{memoize, CacheOptions, Memoized, TimedCache};
pub use config::Config;

//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheOptions;

/// Default NextDNS API base URL
pub const DEFAULT_API_URL: &str = "https://api.nextdns.io";

/// Default base URL of the blocklist metadata documents
pub const DEFAULT_METADATA_URL: &str =
    "https://raw.githubusercontent.com/nextdns/metadata/master/privacy/blocklists";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime of the resolution cache in seconds
    pub cache_ttl: u64,
    /// Bound on cached resolutions, None = unbounded
    pub cache_max_entries: Option<usize>,
    /// Whether cache keys distinguish argument kinds
    pub cache_typed: bool,
    /// NextDNS API base URL
    pub api_url: String,
    /// Blocklist metadata base URL
    pub metadata_url: String,
    /// Timeout for every upstream request in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CACHE_TTL` - Cache window in seconds (default: 86400)
    /// - `CACHE_MAX_ENTRIES` - Bound on cached resolutions (default: unbounded)
    /// - `CACHE_TYPED` - Type-sensitive cache keys (default: false)
    /// - `NEXTDNS_API_URL` - NextDNS API base URL
    /// - `BLOCKLIST_METADATA_URL` - Blocklist metadata base URL
    /// - `REQUEST_TIMEOUT` - Upstream request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES").or(defaults.cache_max_entries),
            cache_typed: parse_var("CACHE_TYPED").unwrap_or(defaults.cache_typed),
            api_url: env::var("NEXTDNS_API_URL").unwrap_or(defaults.api_url),
            metadata_url: env::var("BLOCKLIST_METADATA_URL").unwrap_or(defaults.metadata_url),
            request_timeout: parse_var("REQUEST_TIMEOUT").unwrap_or(defaults.request_timeout),
        }
    }

    /// Memoizer options for the resolution cache.
    pub fn cache_options(&self) -> CacheOptions {
        CacheOptions::new()
            .duration(Duration::from_secs(self.cache_ttl))
            .max_size(self.cache_max_entries)
            .typed(self.cache_typed)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            cache_ttl: 60 * 60 * 24,
            cache_max_entries: None,
            cache_typed: false,
            api_url: DEFAULT_API_URL.to_string(),
            metadata_url: DEFAULT_METADATA_URL.to_string(),
            request_timeout: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cache_ttl, 86_400);
        assert_eq!(config.cache_max_entries, None);
        assert!(!config.cache_typed);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, 30);
    }

    #[test]
    fn test_config_from_env() {
        env::set_var("CACHE_TTL", "120");
        env::set_var("CACHE_MAX_ENTRIES", "not-a-number");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, 120);
        assert_eq!(config.cache_max_entries, None);
        assert_eq!(config.server_port, 8080);

        env::remove_var("CACHE_TTL");
        env::remove_var("CACHE_MAX_ENTRIES");
    }

    #[test]
    fn test_cache_options() {
        let config = Config {
            cache_ttl: 60,
            cache_max_entries: Some(10),
            cache_typed: true,
            ..Config::default()
        };

        let options = config.cache_options();
        assert_eq!(options.duration, Duration::from_secs(60));
        assert_eq!(options.max_size, Some(10));
        assert!(options.typed);
    }
}

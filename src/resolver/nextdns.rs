//! NextDNS resolver
//!
//! Reads the blocklists enabled on a profile, then looks up each one's
//! metadata document to find the text files behind it.

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, instrument};

use super::BlocklistResolver;
use crate::config::{DEFAULT_API_URL, DEFAULT_METADATA_URL};
use crate::error::{AppError, Result};
use crate::models::{BlocklistMetadata, ProfileResponse};

/// Header carrying the NextDNS API key
const API_KEY_HEADER: &str = "X-Api-Key";

/// Resolver backed by the live NextDNS API.
#[derive(Debug, Clone)]
pub struct NextDnsResolver {
    http_client: reqwest::Client,
    api_url: String,
    metadata_url: String,
}

impl NextDnsResolver {
    /// Creates a resolver against the public NextDNS endpoints.
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_urls(http_client, DEFAULT_API_URL, DEFAULT_METADATA_URL)
    }

    /// Creates a resolver against custom base URLs.
    pub fn with_urls(
        http_client: reqwest::Client,
        api_url: impl Into<String>,
        metadata_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_url: trim_base(api_url.into()),
            metadata_url: trim_base(metadata_url.into()),
        }
    }

    async fn fetch_profile(&self, configuration_id: &str, api_key: &str) -> Result<ProfileResponse> {
        let url = endpoint(&self.api_url, &["profiles", configuration_id])?;
        let profile = self
            .http_client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(profile)
    }

    async fn fetch_metadata(&self, blocklist_id: &str) -> Result<BlocklistMetadata> {
        let document = format!("{}.json", blocklist_id);
        let url = endpoint(&self.metadata_url, &[document.as_str()])?;
        let metadata = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(metadata)
    }
}

#[async_trait]
impl BlocklistResolver for NextDnsResolver {
    #[instrument(skip(self, api_key))]
    async fn resolve(&self, configuration_id: &str, api_key: &str) -> Result<Vec<String>> {
        let profile = self.fetch_profile(configuration_id, api_key).await?;
        let blocklists = profile.data.privacy.blocklists;
        debug!("Profile enables {} blocklist(s)", blocklists.len());

        let mut urls = Vec::new();
        for blocklist in &blocklists {
            let metadata = self.fetch_metadata(&blocklist.id).await?;
            let sources = metadata.urls();
            if sources.is_empty() {
                debug!("Blocklist {} has no source URL, skipping", blocklist.id);
            }
            urls.extend(sources);
        }

        Ok(urls)
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Appends `segments` to `base` as path segments, percent-encoding any
/// `/`, `?` or `#` they contain.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| AppError::Internal(format!("Invalid base URL {}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| AppError::Internal(format!("Base URL {} cannot take a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let resolver = NextDnsResolver::with_urls(
            reqwest::Client::new(),
            "http://api.local/",
            "http://meta.local//",
        );
        assert_eq!(resolver.api_url, "http://api.local");
        assert_eq!(resolver.metadata_url, "http://meta.local");
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let url = endpoint("http://api.local/v1", &["profiles", "abc123"]).unwrap();
        assert_eq!(url.as_str(), "http://api.local/v1/profiles/abc123");

        let url = endpoint("http://meta.local", &["oisd.json"]).unwrap();
        assert_eq!(url.as_str(), "http://meta.local/oisd.json");
    }

    #[test]
    fn test_endpoint_encodes_reserved_characters() {
        let url = endpoint("http://api.local", &["profiles", "a?b/c#d"]).unwrap();
        assert_eq!(url.as_str(), "http://api.local/profiles/a%3Fb%2Fc%23d");
        assert_eq!(url.query(), None);
        assert_eq!(url.path_segments().unwrap().count(), 2);
    }

    #[test]
    fn test_endpoint_rejects_invalid_base() {
        assert!(matches!(
            endpoint("not a url", &["profiles"]),
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn test_default_urls() {
        let resolver = NextDnsResolver::new(reqwest::Client::new());
        assert_eq!(resolver.api_url, DEFAULT_API_URL);
        assert_eq!(resolver.metadata_url, DEFAULT_METADATA_URL);
    }
}

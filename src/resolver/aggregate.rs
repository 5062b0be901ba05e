//! Blocklist aggregation
//!
//! Downloads resolved lists one after another and joins them into one body.

use tracing::{debug, instrument};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Aggregator {
    http_client: reqwest::Client,
}

impl Aggregator {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Fetches every URL in order and concatenates the bodies, each one
    /// followed by a newline. The first failure aborts the whole aggregate.
    #[instrument(skip(self, urls), fields(lists = urls.len()))]
    pub async fn aggregate(&self, urls: &[String]) -> Result<String> {
        let mut aggregated = String::new();
        for url in urls {
            let text = self
                .http_client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            debug!("Fetched {} bytes from {}", text.len(), url);
            aggregated.push_str(&text);
            aggregated.push('\n');
        }
        Ok(aggregated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_list_gives_empty_body() {
        let aggregator = Aggregator::new(reqwest::Client::new());
        let body = aggregator.aggregate(&[]).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_url_fails() {
        let aggregator = Aggregator::new(reqwest::Client::new());
        let urls = vec!["http://127.0.0.1:1/list.txt".to_string()];
        assert!(aggregator.aggregate(&urls).await.is_err());
    }
}

//! Cached resolver
//!
//! Memoizes an inner resolver by `(configuration_id, api_key)`. Resolution
//! is the slow, rate-limited step, so it is the only one cached.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::BlocklistResolver;
use crate::cache::{CacheOptions, CacheStats, Keyable, TimedCache};
use crate::error::Result;

#[derive(Clone)]
pub struct CachedResolver {
    inner: Arc<dyn BlocklistResolver>,
    cache: TimedCache<Vec<String>>,
}

impl CachedResolver {
    pub fn new(inner: Arc<dyn BlocklistResolver>, options: CacheOptions) -> Self {
        Self {
            inner,
            cache: TimedCache::new(options),
        }
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Drops every cached resolution; returns how many there were.
    pub async fn clear(&self) -> usize {
        self.cache.clear().await
    }
}

#[async_trait]
impl BlocklistResolver for CachedResolver {
    #[instrument(skip(self, api_key))]
    async fn resolve(&self, configuration_id: &str, api_key: &str) -> Result<Vec<String>> {
        let key = (configuration_id, api_key).cache_key(self.cache.options().typed);
        self.cache
            .get_or_try_insert_with(key, || async move {
                debug!("Resolution cache miss");
                self.inner.resolve(configuration_id, api_key).await
            })
            .await
    }
}

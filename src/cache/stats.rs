//! Cache Statistics Module
//!
//! Tracks memoizer performance: hits, misses, evictions and expiry clears.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of a memoized function's cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Calls answered from the cache
    pub hits: u64,
    /// Calls that had to invoke the wrapped function
    pub misses: u64,
    /// Number of entries currently cached
    pub current_size: usize,
    /// Configured bound on entries, None = unbounded
    pub max_size: Option<usize>,
    /// Entries dropped by the LRU bound
    pub evictions: u64,
    /// Times the whole cache was cleared because its window elapsed
    pub expirations: u64,
}

impl CacheStats {
    /// Creates empty stats for a cache with the given bound.
    pub fn new(max_size: Option<usize>) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing was looked up yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    pub fn set_current_size(&mut self, count: usize) {
        self.current_size = count;
    }
}

//! Cache Store Module
//!
//! State of one memoized function: a HashMap of results, LRU order for the
//! bounded mode, and the single expiry timestamp shared by every entry.
//!
//! The store is not synchronized; [`TimedCache`](super::TimedCache) owns it
//! behind a mutex.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheKey, CacheStats, LruTracker};

/// Stand-in for windows too long to represent, roughly 30 years out
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// End of a window opened at `now`. Durations that overflow `Instant`
/// saturate to a point that is never reached in practice.
fn window_end(now: Instant, duration: Duration) -> Instant {
    now.checked_add(duration).unwrap_or_else(|| now + FAR_FUTURE)
}

// == Timed Store ==
#[derive(Debug)]
pub struct TimedStore<V> {
    /// Memoized results by argument key
    entries: HashMap<CacheKey, V>,
    /// LRU access tracker, only maintained when bounded
    lru: LruTracker<CacheKey>,
    /// Performance statistics
    stats: CacheStats,
    /// Bound on entries, None = unbounded
    max_size: Option<usize>,
    /// Length of one expiry window
    duration: Duration,
    /// Instant at which the whole cache is dropped
    expiration: Instant,
    /// Bumped on every clear so stale computations can be recognised
    epoch: u64,
}

impl<V: Clone> TimedStore<V> {
    // == Constructor ==
    /// Creates an empty store whose first window ends at `now + duration`.
    pub fn new(duration: Duration, max_size: Option<usize>, now: Instant) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(max_size),
            max_size,
            duration,
            expiration: window_end(now, duration),
            epoch: 0,
        }
    }

    // == Expire If Due ==
    /// Clears every entry and opens a new window if `now` reached the expiry.
    ///
    /// Returns true when a clear happened.
    pub fn expire_if_due(&mut self, now: Instant) -> bool {
        if now < self.expiration {
            return false;
        }

        self.clear();
        self.expiration = window_end(now, self.duration);
        self.stats.record_expiration();
        true
    }

    // == Lookup ==
    /// Returns the cached value for `key`, recording a hit or a miss.
    pub fn lookup(&mut self, key: &CacheKey) -> Option<V> {
        match self.entries.get(key) {
            Some(value) => {
                let value = value.clone();
                self.stats.record_hit();
                if self.max_size.is_some() {
                    self.lru.touch(key);
                }
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Stores a freshly computed value.
    ///
    /// The value is dropped when it was computed under an older `epoch`, i.e.
    /// the cache was cleared while the computation ran. Returns whether the
    /// value was stored.
    pub fn insert(&mut self, key: CacheKey, value: V, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }

        match self.max_size {
            Some(0) => return false,
            Some(max) => {
                let is_overwrite = self.entries.contains_key(&key);
                if !is_overwrite && self.entries.len() >= max {
                    if let Some(evicted_key) = self.lru.evict_oldest() {
                        self.entries.remove(&evicted_key);
                        self.stats.record_eviction();
                    }
                }
                self.lru.touch(&key);
            }
            None => {}
        }

        self.entries.insert(key, value);
        self.stats.set_current_size(self.entries.len());
        true
    }

    // == Clear ==
    /// Evicts every entry and returns how many there were. The expiry window
    /// and the counters are untouched.
    pub fn clear(&mut self) -> usize {
        let cleared = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.stats.set_current_size(0);
        self.epoch += 1;
        cleared
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_current_size(self.entries.len());
        stats
    }

    /// Current epoch, to be handed back to [`insert`](Self::insert).
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn expiration(&self) -> Instant {
        self.expiration
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

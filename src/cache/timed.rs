//! Timed Cache Module
//!
//! Thread-safe handle over a [`TimedStore`]. This is where the expiry check,
//! the lookup and the insert are serialized.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::cache::{CacheKey, CacheStats, TimedStore, DEFAULT_DURATION_SECS};

// == Cache Options ==
/// Configuration fixed at wrap time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// Length of the expiry window
    pub duration: Duration,
    /// Bound on distinct cached keys, None = unbounded
    pub max_size: Option<usize>,
    /// Whether keys of equal value but different kind are distinct
    pub typed: bool,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(DEFAULT_DURATION_SECS),
            max_size: None,
            typed: false,
        }
    }
}

impl CacheOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn max_size(mut self, max_size: Option<usize>) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn typed(mut self, typed: bool) -> Self {
        self.typed = typed;
        self
    }
}

// == Timed Cache ==
/// Cloneable, shared cache whose entries are all dropped together once its
/// window elapses.
///
/// Clones share the same store. Independently created caches never share
/// state, even when they wrap the same function.
#[derive(Debug)]
pub struct TimedCache<V> {
    store: Arc<Mutex<TimedStore<V>>>,
    options: CacheOptions,
}

impl<V> Clone for TimedCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            options: self.options,
        }
    }
}

impl<V: Clone> TimedCache<V> {
    // == Constructor ==
    /// Creates an empty cache; the first window starts now.
    pub fn new(options: CacheOptions) -> Self {
        let store = TimedStore::new(options.duration, options.max_size, Instant::now());
        Self {
            store: Arc::new(Mutex::new(store)),
            options,
        }
    }

    pub fn options(&self) -> CacheOptions {
        self.options
    }

    // == Get Or Try Insert ==
    /// Returns the value cached under `key`, or computes it with `f`.
    ///
    /// The lock is held while checking expiry and looking up, released while
    /// `f` runs, and taken again to insert. Errors from `f` are returned as is
    /// and never cached. If the cache was cleared while `f` ran, the result is
    /// returned to this caller but not stored. Concurrent misses on the same
    /// key each run `f`.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: CacheKey, f: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let epoch = {
            let mut store = self.store.lock().await;
            if store.expire_if_due(Instant::now()) {
                debug!(
                    "Cache window of {:?} elapsed, cleared all entries",
                    self.options.duration
                );
            }
            if let Some(value) = store.lookup(&key) {
                return Ok(value);
            }
            store.epoch()
        };

        let value = f().await?;

        let mut store = self.store.lock().await;
        if !store.insert(key, value.clone(), epoch) {
            debug!("Computed value not cached");
        }
        Ok(value)
    }

    // == Stats ==
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == Clear ==
    /// Evicts every entry and returns how many there were. The expiry window
    /// keeps running unchanged.
    pub async fn clear(&self) -> usize {
        self.store.lock().await.clear()
    }
}

//! Memoize Module
//!
//! Wraps an async function so repeated calls with the same arguments are
//! answered from a [`TimedCache`] until its window elapses.
//!
//! # Example
//! ```ignore
//! let double = memoize(
//!     |(x,): (i64,)| async move { Ok::<_, Infallible>(x * 2) },
//!     CacheOptions::new().duration(Duration::from_secs(2)),
//! );
//! assert_eq!(double.call((5,)).await, Ok(10));
//! ```

use std::future::Future;
use std::sync::Arc;

use crate::cache::{CacheOptions, CacheStats, Keyable, TimedCache};

// == Memoized Function ==
/// A function bundled with its own expiring cache.
pub struct Memoized<F, V> {
    func: Arc<F>,
    cache: TimedCache<V>,
}

impl<F, V> Clone for Memoized<F, V> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            cache: self.cache.clone(),
        }
    }
}

/// Wraps `func` with an expiring memoization cache configured by `options`.
pub fn memoize<F, V>(func: F, options: CacheOptions) -> Memoized<F, V>
where
    V: Clone,
{
    Memoized {
        func: Arc::new(func),
        cache: TimedCache::new(options),
    }
}

impl<F, V: Clone> Memoized<F, V> {
    // == Call ==
    /// Invokes the wrapped function, or returns the cached result for `args`.
    pub async fn call<A, Fut, E>(&self, args: A) -> Result<V, E>
    where
        A: Keyable,
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let key = args.cache_key(self.cache.options().typed);
        self.cache
            .get_or_try_insert_with(key, || (self.func)(args))
            .await
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Evicts every cached result.
    pub async fn clear(&self) {
        self.cache.clear().await;
    }

    pub fn options(&self) -> CacheOptions {
        self.cache.options()
    }
}

//! Cache Module
//!
//! Expiring memoization: exact-match caching of a function's results by
//! argument list, with one shared expiry window after which the whole cache
//! is dropped and refilled from scratch.

mod key;
mod lru;
mod memoize;
mod stats;
mod store;
mod timed;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use key::{ArgKind, ArgValue, Args, CacheKey, Keyable, ToArg};
pub use lru::LruTracker;
pub use memoize::{memoize, Memoized};
pub use stats::CacheStats;
pub use store::TimedStore;
pub use timed::{CacheOptions, TimedCache};

// == Public Constants ==
/// Expiry window used when none is configured, in seconds
pub const DEFAULT_DURATION_SECS: u64 = 7000;

//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store and key invariants over random inputs.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{ArgValue, CacheKey, Keyable, TimedStore};

// == Test Configuration ==
const WINDOW: Duration = Duration::from_secs(60);

// == Strategies ==
fn arg_strategy() -> impl Strategy<Value = ArgValue> {
    prop_oneof![
        any::<i64>().prop_map(ArgValue::Int),
        any::<bool>().prop_map(ArgValue::Bool),
        (-1.0e6f64..1.0e6).prop_map(ArgValue::Float),
        "[a-z0-9]{0,8}".prop_map(ArgValue::Text),
    ]
}

fn key_strategy() -> impl Strategy<Value = CacheKey> {
    prop::collection::vec(arg_strategy(), 0..4)
        .prop_map(|args| CacheKey::new(&args, &[], false))
}

/// Operations against a single store
#[derive(Debug, Clone)]
enum StoreOp {
    Lookup(i64),
    Insert(i64),
    Clear,
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        (0i64..20).prop_map(StoreOp::Lookup),
        (0i64..20).prop_map(StoreOp::Insert),
        Just(StoreOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every lookup is counted exactly once, as a hit or a miss.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(store_op_strategy(), 1..60)) {
        let mut store = TimedStore::new(WINDOW, None, Instant::now());
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                StoreOp::Lookup(n) => match store.lookup(&(n,).cache_key(false)) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                StoreOp::Insert(n) => {
                    let epoch = store.epoch();
                    store.insert((n,).cache_key(false), n, epoch);
                }
                StoreOp::Clear => {
                    store.clear();
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.current_size, store.len());
    }

    // A bounded store never holds more than its bound.
    #[test]
    fn prop_capacity_enforcement(
        max_size in 1usize..16,
        keys in prop::collection::vec(0i64..64, 1..200)
    ) {
        let mut store = TimedStore::new(WINDOW, Some(max_size), Instant::now());

        for n in keys {
            store.insert((n,).cache_key(false), n, 0);
            prop_assert!(store.len() <= max_size);
        }
    }

    // Whatever was inserted in the current epoch comes back unchanged.
    #[test]
    fn prop_insert_then_lookup(key in key_strategy(), value in any::<u32>()) {
        let mut store = TimedStore::new(WINDOW, None, Instant::now());

        prop_assert!(store.insert(key.clone(), value, store.epoch()));
        prop_assert_eq!(store.lookup(&key), Some(value));
    }

    // Nothing survives an expiry, no matter how many keys were cached.
    #[test]
    fn prop_expiry_clears_all(keys in prop::collection::hash_set(0i64..1000, 1..50)) {
        let start = Instant::now();
        let mut store = TimedStore::new(WINDOW, None, start);
        for n in &keys {
            store.insert((*n,).cache_key(false), *n, 0);
        }

        prop_assert!(store.expire_if_due(start + WINDOW));

        for n in &keys {
            prop_assert_eq!(store.lookup(&(*n,).cache_key(false)), None);
        }
    }

    // Typed keys are never coarser than untyped ones.
    #[test]
    fn prop_typed_refines_untyped(
        a in prop::collection::vec(arg_strategy(), 0..3),
        b in prop::collection::vec(arg_strategy(), 0..3)
    ) {
        let typed_equal = CacheKey::new(&a, &[], true) == CacheKey::new(&b, &[], true);
        let untyped_equal = CacheKey::new(&a, &[], false) == CacheKey::new(&b, &[], false);
        prop_assert!(!typed_equal || untyped_equal);
    }

    // Distinct integers always map to distinct keys.
    #[test]
    fn prop_distinct_ints_distinct_keys(values in prop::collection::hash_set(any::<i64>(), 1..30)) {
        let keys: HashSet<CacheKey> = values.iter().map(|v| (*v,).cache_key(false)).collect();
        prop_assert_eq!(keys.len(), values.len());
    }
}

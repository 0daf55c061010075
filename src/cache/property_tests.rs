//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the memoizer against a simple reference model.

use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::cache::{CacheStore, ManualClock, Memoizer};

// == Test Configuration ==
const TEST_TTL_MS: u64 = 10_000;

// == Strategies ==
/// Generates keys from a small pool so sequences revisit them often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-d]".prop_map(|s| s)
}

/// A step in a memoizer session
#[derive(Debug, Clone)]
enum MemoOp {
    Fetch { key: String },
    Advance { ms: u64 },
}

fn memo_op_strategy() -> impl Strategy<Value = MemoOp> {
    prop_oneof![
        3 => key_strategy().prop_map(|key| MemoOp::Fetch { key }),
        1 => (0u64..15_000).prop_map(|ms| MemoOp::Advance { ms }),
    ]
}

/// Memoizer whose computation returns the global call number.
fn numbering_memoizer(
    clock: &ManualClock,
) -> (
    Memoizer<String, u64, impl FnMut(&String) -> Result<u64, ()>, ManualClock>,
    Rc<Cell<u64>>,
) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let compute = move |_: &String| -> Result<u64, ()> {
        counter.set(counter.get() + 1);
        Ok(counter.get())
    };
    let memo = Memoizer::with_clock(compute, clock.clone())
        .with_ttl(Duration::from_millis(TEST_TTL_MS));
    (memo, calls)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // For any sequence of fetches and clock advances, the memoizer returns
    // the same values and performs the same computations as a model that
    // recomputes exactly when an entry is absent or at least TTL old.
    #[test]
    fn prop_matches_reference_model(ops in prop::collection::vec(memo_op_strategy(), 1..60)) {
        let clock = ManualClock::new(0);
        let (mut memo, calls) = numbering_memoizer(&clock);

        let mut model: HashMap<String, (u64, u64)> = HashMap::new();
        let mut model_calls: u64 = 0;
        let mut now: u64 = 0;
        let mut fetches: u64 = 0;

        for op in ops {
            match op {
                MemoOp::Advance { ms } => {
                    clock.advance(Duration::from_millis(ms));
                    now += ms;
                }
                MemoOp::Fetch { key } => {
                    fetches += 1;
                    let expected = match model.get(&key) {
                        Some(&(value, produced_at)) if now - produced_at < TEST_TTL_MS => value,
                        _ => {
                            model_calls += 1;
                            model.insert(key.clone(), (model_calls, now));
                            model_calls
                        }
                    };
                    prop_assert_eq!(memo.fetch(key), Ok(expected));
                }
            }
        }

        let stats = memo.stats();
        prop_assert_eq!(calls.get(), model_calls);
        prop_assert_eq!(stats.misses, model_calls);
        prop_assert_eq!(stats.hits + stats.misses, fetches);
        prop_assert_eq!(stats.total_entries, model.len());
    }

    // At most one entry per key, however many times it is recomputed.
    #[test]
    fn prop_one_entry_per_key(keys in prop::collection::vec(key_strategy(), 1..40)) {
        let clock = ManualClock::new(0);
        let (mut memo, _) = numbering_memoizer(&clock);

        for key in &keys {
            memo.fetch(key.clone()).unwrap();
            clock.advance(Duration::from_millis(TEST_TTL_MS));
        }

        let distinct: std::collections::HashSet<_> = keys.iter().collect();
        prop_assert_eq!(memo.len(), distinct.len());
    }

    // produced_at never decreases for a key, whatever the clock does.
    #[test]
    fn prop_produced_at_monotonic(times in prop::collection::vec(0u64..1_000_000, 1..30)) {
        let mut store = CacheStore::new();
        let mut last = 0u64;

        for (i, t) in times.into_iter().enumerate() {
            let recorded = store.insert("paris", i, t);
            prop_assert!(recorded >= last, "produced_at went from {} to {}", last, recorded);
            last = recorded;
        }
    }

    // A failing computation never leaves an entry behind.
    #[test]
    fn prop_failures_never_cached(keys in prop::collection::vec(key_strategy(), 1..30)) {
        let clock = ManualClock::new(0);
        let mut memo = Memoizer::with_clock(
            |key: &String| -> Result<u64, String> { Err(format!("no data for {}", key)) },
            clock,
        );

        for key in &keys {
            prop_assert!(memo.fetch(key.clone()).is_err());
        }

        prop_assert!(memo.is_empty());
        let stats = memo.stats();
        prop_assert_eq!(stats.failures, keys.len() as u64);
        prop_assert_eq!(stats.hits, 0);
    }
}

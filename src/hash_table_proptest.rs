#![cfg(test)]

// Property tests for ChainedHashTable kept inside the crate so the
// collision-forcing hasher from `test_support` is reachable.

use crate::hash_table::{ChainedHashTable, DuplicatePolicy, TableConfig};
use crate::test_support::ConstBuildHasher;
use core::hash::BuildHasher;
use proptest::prelude::*;
use std::collections::hash_map::RandomState;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations so shrinking moves toward earlier keys and
// shorter op lists.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=10).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            2 => idx.clone().prop_map(Op::Remove),
            2 => idx.clone().prop_map(Op::Get),
            1 => prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(Op::Contains),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
            1 => Just(Op::Iterate),
            1 => Just(Op::Clear).no_shrink(),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn tiny_config() -> TableConfig {
    // Small start so most scenarios cross the load limit at least once.
    TableConfig::default().with_initial_capacity(2)
}

// Drives the table and a std HashMap model through the same ops and checks
// they agree after every step.
fn run_against_model<S: BuildHasher>(
    mut sut: ChainedHashTable<String, i32, S>,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            Op::Insert(i, v) => {
                let k = pool[i].clone();
                let prev = sut.insert(k.clone(), v);
                prop_assert_eq!(prev, model.insert(k, v));
            }
            Op::Remove(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.remove(k.as_str()), model.remove(k));
            }
            Op::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k.as_str()), model.get(k));
            }
            Op::Contains(s) => {
                prop_assert_eq!(sut.contains_key(s.as_str()), model.contains_key(&s));
            }
            Op::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.get_mut(k.as_str()), model.get_mut(k)) {
                    (Some(a), Some(b)) => {
                        *a = a.wrapping_add(d);
                        *b = b.wrapping_add(d);
                    }
                    (None, None) => {}
                    (a, b) => prop_assert!(false, "presence mismatch: {:?} vs {:?}", a, b),
                }
            }
            Op::Iterate => {
                let s_keys: BTreeSet<_> = sut.keys().cloned().collect();
                let m_keys: BTreeSet<_> = model.keys().cloned().collect();
                prop_assert_eq!(s_keys, m_keys);
                prop_assert_eq!(sut.iter().count(), sut.len());
            }
            Op::Clear => {
                sut.clear();
                model.clear();
            }
        }

        // Post-conditions after each op.
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.load_factor() <= 1.0, "load stays bounded by growth");
    }

    // Every surviving key still resolves after however many resizes ran.
    for (k, v) in &model {
        prop_assert_eq!(sut.get(k.as_str()), Some(v));
    }
    Ok(())
}

// Property: the table behaves like a map (replace policy) under random
// operation sequences, including across resizes.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_matches_std_map((pool, ops) in arb_scenario()) {
        let sut: ChainedHashTable<String, i32, RandomState> =
            ChainedHashTable::with_config(tiny_config()).unwrap();
        run_against_model(sut, &pool, ops)?;
    }
}

// Property: same agreement when every key collides into one chain, so
// equality alone separates entries.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_matches_std_map_with_collisions((pool, ops) in arb_scenario()) {
        let sut: ChainedHashTable<String, i32, ConstBuildHasher> =
            ChainedHashTable::with_config_and_hasher(tiny_config(), ConstBuildHasher).unwrap();
        run_against_model(sut, &pool, ops)?;
    }
}

// Property: under the append policy each insert adds an entry, lookups see
// the oldest surviving value for a key, and removals peel entries off in
// insertion order.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_append_policy_is_fifo_per_key(
        ops in proptest::collection::vec((0usize..4, any::<bool>(), any::<i16>()), 1..120)
    ) {
        let mut sut: ChainedHashTable<usize, i16> = ChainedHashTable::with_config(
            tiny_config().with_duplicate_policy(DuplicatePolicy::Append),
        )
        .unwrap();
        let mut model: Vec<std::collections::VecDeque<i16>> = vec![Default::default(); 4];

        for (k, is_insert, v) in ops {
            if is_insert {
                prop_assert_eq!(sut.insert(k, v), None);
                model[k].push_back(v);
            } else {
                prop_assert_eq!(sut.remove(&k), model[k].pop_front());
            }
            prop_assert_eq!(sut.get(&k), model[k].front());
            prop_assert_eq!(sut.len(), model.iter().map(|q| q.len()).sum::<usize>());
        }
    }
}

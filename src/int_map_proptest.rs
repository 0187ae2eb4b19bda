#![cfg(test)]

// Property tests for the integer maps kept inside the crate so they can
// validate arena chains after every step.

use crate::int_int_map::IntIntHashMap;
use crate::int_obj_map::IntObjHashMap;
use crate::options::{DuplicateCheck, TableOptions};
use hashbrown::HashMap;
use proptest::prelude::*;

// Keys come from a small pool so that chains collide and removals hit.
#[derive(Clone, Debug)]
enum Op {
    Add(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(i32),
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<i32>, Vec<Op>)> {
    let key = prop_oneof![-40i32..40, any::<i32>()].prop_filter("sentinel", |&k| k != -1);
    (1usize..12, proptest::collection::vec(key, 1..=16)).prop_flat_map(|(capacity, pool)| {
        let idx = 0..pool.len();
        let value = any::<i32>().prop_filter("sentinel", |&v| v != -1);
        let op = prop_oneof![
            6 => (idx.clone(), value).prop_map(|(i, v)| Op::Add(i, v)),
            3 => idx.clone().prop_map(Op::Remove),
            2 => idx.clone().prop_map(Op::Get),
            1 => any::<i32>().prop_map(Op::Contains),
            1 => Just(Op::Clear),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (capacity, pool.clone(), ops))
    })
}

// Property: with exact duplicate checks IntIntHashMap behaves like a map with
// last-write-wins adds.
// - `add` reports true iff the key was absent; the value is always stored.
// - `get`/`contains`/`remove` agree with the model.
// - `len`/`is_empty` parity and chain invariants hold after every op,
//   including across growth, compaction and `clear`.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_int_map_exact_matches_model((capacity, pool, ops) in arb_scenario()) {
        let options = TableOptions::new(capacity).duplicate_check(DuplicateCheck::Exact);
        let mut sut = IntIntHashMap::with_options(options).unwrap();
        let mut model: HashMap<i32, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Add(i, v) => {
                    let k = pool[i];
                    let fresh = !model.contains_key(&k);
                    prop_assert_eq!(sut.add(k, v), fresh);
                    model.insert(k, v);
                }
                Op::Remove(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(&k).is_some());
                    prop_assert!(!sut.contains(k));
                }
                Op::Get(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.get(k), model.get(&k).copied());
                }
                Op::Contains(k) => {
                    prop_assert_eq!(sut.contains(k), model.contains_key(&k));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.capacity(), capacity);
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert_eq!(sut.validate(), Ok(()));
        }
        for (&k, &v) in &model {
            prop_assert_eq!(sut.get(k), Some(v));
        }
    }
}

// Property: the legacy chain scan is indistinguishable from exact checks as
// long as no two keys ever carry the same value. Values are derived from the
// key's pool index and a per-key version, which keeps them injective.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_int_map_legacy_with_unique_values((capacity, pool, ops) in arb_scenario()) {
        let mut sut = IntIntHashMap::new(capacity);
        let mut model: HashMap<i32, i32> = HashMap::new();
        let mut version = vec![0i32; pool.len()];

        for op in ops {
            match op {
                Op::Add(i, _) => {
                    let k = pool[i];
                    // Pool positions holding the same key share a version counter.
                    let slot = pool.iter().position(|&p| p == k).unwrap();
                    version[slot] += 1;
                    let v = (slot as i32) * 1_000 + version[slot];
                    prop_assert_eq!(sut.add(k, v), !model.contains_key(&k));
                    model.insert(k, v);
                }
                Op::Remove(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(&k).is_some());
                }
                Op::Get(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.get(k), model.get(&k).copied());
                }
                Op::Contains(k) => {
                    prop_assert_eq!(sut.contains(k), model.contains_key(&k));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.validate(), Ok(()));
        }
    }
}

// Property: IntObjHashMap with owned String values follows the same model and
// hands back the owned value on removal.
proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]
    #[test]
    fn prop_obj_map_matches_model((capacity, pool, ops) in arb_scenario()) {
        let mut sut: IntObjHashMap<String> = IntObjHashMap::new(capacity);
        let mut model: HashMap<i32, String> = HashMap::new();

        for op in ops {
            match op {
                Op::Add(i, v) => {
                    let k = pool[i];
                    let value = format!("v{v}");
                    prop_assert_eq!(sut.add(k, value.clone()), !model.contains_key(&k));
                    model.insert(k, value);
                }
                Op::Remove(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(&k));
                }
                Op::Get(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.get(k), model.get(&k));
                }
                Op::Contains(k) => {
                    prop_assert_eq!(sut.contains(k), model.contains_key(&k));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.validate(), Ok(()));
        }
    }
}

// IntIntHashMap integration tests.
//
// Each test documents the behavior verified. Invariants exercised:
// - Counting: len() equals the number of adds that reported true minus
//   successful removes.
// - Last write wins: re-adding a key replaces its value and reports false.
// - Growth never loses or duplicates distinct keys.
// - clear() empties the map and restores the initial capacity.
use compact_hash::{CapacityError, DuplicateCheck, IntIntHashMap, TableOptions, EMPTY};

// Test: overwrite through an exact key match.
// Verifies: second add reports false, value is replaced, len stays 1.
#[test]
fn add_same_key_overwrites_value() {
    let mut map = IntIntHashMap::new(10);
    assert!(map.add(1, 2));
    assert!(!map.add(1, 3));
    assert_eq!(map.get(1), Some(3));
    assert_eq!(map.len(), 1);
    assert!(map.contains(1));
}

// Test: two growth cycles starting from capacity 10.
// Verifies: 99 keys all retrievable with their own values.
#[test]
fn growth_from_small_capacity() {
    let mut map = IntIntHashMap::new(10);
    for i in 0..99 {
        assert!(map.add(i, i * 100), "add {i}");
    }
    assert_eq!(map.len(), 99);
    for i in 0..99 {
        assert_eq!(map.get(i), Some(i * 100), "value of {i}");
    }
}

// Test: keys spread over the whole i32 range, negatives included.
#[test]
fn negative_and_extreme_keys() {
    let mut map = IntIntHashMap::new(7);
    let keys = [i32::MIN, i32::MAX, -2, 0, -7, 7, -1_000_003];
    for (n, &k) in keys.iter().enumerate() {
        assert!(map.add(k, n as i32));
    }
    for (n, &k) in keys.iter().enumerate() {
        assert_eq!(map.get(k), Some(n as i32));
    }
    assert_eq!(map.len(), keys.len());
}

// Test: the sentinel never enters the map.
#[test]
fn sentinel_inputs_are_rejected() {
    let mut map = IntIntHashMap::new(10);
    assert!(!map.add(EMPTY, 5));
    assert!(!map.add(5, EMPTY));
    assert!(map.is_empty());
    assert!(!map.contains(5));
}

// Test: removal bookkeeping.
// Verifies: remove hits once, then misses; len drops by exactly one; missing
// keys leave len unchanged.
#[test]
fn remove_existing_and_missing() {
    let mut map = IntIntHashMap::new(10);
    map.add(3, 30);
    map.add(13, 130);
    map.add(23, 230);

    assert!(map.remove(13));
    assert_eq!(map.len(), 2);
    assert!(!map.contains(13));
    assert_eq!(map.get(13), None);

    assert!(!map.remove(13));
    assert!(!map.remove(42));
    assert_eq!(map.len(), 2);

    assert_eq!(map.get(3), Some(30));
    assert_eq!(map.get(23), Some(230));
}

// Test: removing the head, middle and tail of one chain in various orders.
#[test]
fn remove_each_chain_position() {
    for order in [[5, 15, 25], [25, 15, 5], [15, 5, 25], [15, 25, 5]] {
        let mut map = IntIntHashMap::new(10);
        for k in [5, 15, 25] {
            map.add(k, k + 1);
        }
        for (removed, &k) in order.iter().enumerate() {
            assert!(map.remove(k), "remove {k} in {order:?}");
            for &rest in &order[removed + 1..] {
                assert_eq!(map.get(rest), Some(rest + 1), "{rest} after removing {k}");
            }
        }
        assert!(map.is_empty());
    }
}

// Test: add everything, remove everything, add everything again.
#[test]
fn refill_after_removing_all() {
    let mut map = IntIntHashMap::new(10);
    for i in 0..99 {
        assert!(map.add(i, i + 1000));
    }
    for i in 0..99 {
        assert!(map.remove(i), "remove {i}");
    }
    assert!(map.is_empty());
    for i in 0..99 {
        assert!(map.add(i, i + 2000));
    }
    for i in 0..99 {
        assert_eq!(map.get(i), Some(i + 2000));
    }
}

// Test: add/remove churn on one key does not grow the arrays.
// Assumes: unlinked slots are reclaimed by rehashing at the same capacity.
#[test]
fn churn_does_not_grow_capacity() {
    let mut map = IntIntHashMap::new(10);
    for round in 0..10_000 {
        assert!(map.add(round, 1));
        assert!(map.remove(round));
    }
    assert_eq!(map.capacity(), 10);
    assert!(map.is_empty());
}

// Test: clear semantics.
// Verifies: len 0, previous keys absent, grown arrays shrink to the initial
// capacity while untouched arrays keep theirs.
#[test]
fn clear_resets_contents_and_capacity() {
    let mut map = IntIntHashMap::new(10);
    for i in 0..5 {
        map.add(i, i + 1);
    }
    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert_eq!(map.capacity(), 10);
    assert!((0..5).all(|i| !map.contains(i)));

    for i in 0..50 {
        map.add(i, i + 1);
    }
    assert!(map.capacity() > 10);
    map.clear();
    assert_eq!(map.capacity(), 10);
    assert!((0..50).all(|i| map.get(i).is_none()));
    assert!(map.add(7, 8));
}

// Test: value-based duplicate detection while scanning a chain.
// Verifies: Legacy drops an add whose value matches an interior slot of
// another key; Exact stores it.
#[test]
fn legacy_and_exact_duplicate_checks_differ() {
    let mut legacy = IntIntHashMap::new(10);
    legacy.add(1, 5);
    legacy.add(11, 6);
    assert!(!legacy.add(21, 5));
    assert!(!legacy.contains(21));

    let options = TableOptions::new(10).duplicate_check(DuplicateCheck::Exact);
    let mut exact = IntIntHashMap::with_options(options).expect("valid options");
    exact.add(1, 5);
    exact.add(11, 6);
    assert!(exact.add(21, 5));
    assert_eq!(exact.get(21), Some(5));
}

// Test: value twins survive growth even under Legacy, because rehashing moves
// entries by identity.
#[test]
fn growth_keeps_value_twins() {
    let mut map = IntIntHashMap::new(10);
    assert!(map.add(1, 5));
    assert!(map.add(11, 5));
    for i in 100..130 {
        map.add(i, i);
    }
    assert!(map.capacity() > 10);
    assert_eq!(map.get(1), Some(5));
    assert_eq!(map.get(11), Some(5));
}

// Test: option validation and clamping.
#[test]
fn construction_options() {
    assert_eq!(
        IntIntHashMap::with_options(TableOptions::new(0)).unwrap_err(),
        CapacityError::Zero
    );
    let mut tiny = IntIntHashMap::new(0);
    assert_eq!(tiny.capacity(), 1);
    assert!(tiny.add(1, 1));
    assert!(tiny.add(2, 2));
    assert_eq!(tiny.get(1), Some(1));
    assert_eq!(tiny.get(2), Some(2));
}

// Test: footprint is four 4-byte arrays per slot.
#[test]
fn memory_usage_is_sixteen_bytes_per_slot() {
    let map = IntIntHashMap::new(1000);
    assert_eq!(map.memory_usage(), 16_000);
}

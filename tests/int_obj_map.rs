// IntObjHashMap integration tests.
//
// Same contract as IntIntHashMap with an owned payload: re-adding a key
// replaces the value, removal hands the value back, growth keeps every key.
use compact_hash::{DuplicateCheck, IntObjHashMap, TableOptions};

fn url(index: i32) -> String {
    format!("https://some.com/test_{index}.html")
}

#[test]
fn add_get_contains() {
    let mut map = IntObjHashMap::new(10);
    assert!(map.add(1, "test".to_string()));
    assert_eq!(map.len(), 1);
    assert!(map.contains(1));
    assert_eq!(map.get(1).map(String::as_str), Some("test"));
}

// Test: the last value written for a key wins; len counts keys.
#[test]
fn re_adding_a_key_replaces_its_value() {
    let mut map = IntObjHashMap::new(10);
    assert!(map.add(1, "test"));
    assert!(map.add(2, "test 1"));
    assert!(!map.add(2, "test 2"));
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(1), Some(&"test"));
    assert_eq!(map.get(2), Some(&"test 2"));

    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert!(!map.contains(1));
}

#[test]
fn growth_from_small_capacity() {
    let mut map = IntObjHashMap::new(10);
    for i in 0..99 {
        assert!(map.add(i, url(i)));
    }
    assert_eq!(map.len(), 99);
    for i in 0..99 {
        assert!(map.contains(i), "does not contain {i}");
        assert_eq!(map.get(i), Some(&url(i)));
    }
}

#[test]
fn large_map_without_growth_pressure() {
    let size = 100_000;
    let mut map = IntObjHashMap::new(50_000);
    for i in 0..size {
        assert!(map.add(i, url(i)));
    }
    assert_eq!(map.len(), size as usize);
    for i in (0..size).step_by(97) {
        assert_eq!(map.get(i), Some(&url(i)));
    }
}

#[test]
fn remove_half_keeps_the_rest() {
    let mut map = IntObjHashMap::new(100);
    for i in 0..99 {
        map.add(i, url(i));
    }
    for i in 0..50 {
        assert_eq!(map.remove(i), Some(url(i)), "could not remove {i}");
    }
    assert_eq!(map.len(), 49);
    assert!(!map.is_empty());
    for i in 50..99 {
        assert_eq!(map.get(i), Some(&url(i)));
    }
}

#[test]
fn remove_all_then_refill() {
    let mut map = IntObjHashMap::new(10);
    for i in 0..99 {
        assert!(map.add(i, url(i)));
    }
    for i in 0..99 {
        assert!(map.remove(i).is_some(), "could not remove {i}");
    }
    assert!(map.is_empty());
    for i in 0..99 {
        assert!(map.add(i, url(i)));
    }
    for i in 0..99 {
        assert_eq!(map.get(i), Some(&url(i)));
    }
}

// Test: removed values are dropped exactly when handed back, not leaked in
// unlinked slots.
#[test]
fn removed_values_are_returned_owned() {
    use std::rc::Rc;

    let shared = Rc::new(());
    let mut map = IntObjHashMap::new(4);
    map.add(1, Rc::clone(&shared));
    map.add(5, Rc::clone(&shared));
    assert_eq!(Rc::strong_count(&shared), 3);
    drop(map.remove(1));
    assert_eq!(Rc::strong_count(&shared), 2);
    map.clear();
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn map_reports_its_options() {
    let options = TableOptions::new(32).duplicate_check(DuplicateCheck::Exact);
    let map: IntObjHashMap<String> = IntObjHashMap::with_options(options).unwrap();
    assert_eq!(map.options(), options);
    assert_eq!(IntObjHashMap::<u8>::new(0).options().initial_capacity(), 1);
}

//! IntIntHashMap: `i32 -> i32` map on parallel arrays.

use crate::arena::{Position, SlotArena, Verdict, EMPTY};
use crate::options::{CapacityError, DuplicateCheck, TableOptions};

/// Chained hash map from `i32` keys to `i32` values.
///
/// `-1` ([`EMPTY`]) is reserved and rejected both as a key and as a value.
/// Adding an existing key overwrites its value in place and reports `false`.
///
/// Under [`DuplicateCheck::Legacy`] an add is also dropped when an interior
/// slot of the key's chain already holds the same value under another key:
///
/// ```
/// use compact_hash::IntIntHashMap;
///
/// let mut m = IntIntHashMap::new(10);
/// assert!(m.add(1, 5));
/// assert!(m.add(11, 6));
/// // 21 shares bucket 1; slot (1, 5) is interior and carries the value 5.
/// assert!(!m.add(21, 5));
/// assert!(!m.contains(21));
/// ```
#[derive(Clone, Debug)]
pub struct IntIntHashMap {
    arena: SlotArena<i32, i32>,
    options: TableOptions,
}

impl IntIntHashMap {
    /// Map with `initial_capacity` slots (clamped to at least one).
    pub fn new(initial_capacity: usize) -> Self {
        Self::from_options(TableOptions::new(initial_capacity).clamped())
    }

    pub fn with_options(options: TableOptions) -> Result<Self, CapacityError> {
        options.validate().map(Self::from_options)
    }

    fn from_options(options: TableOptions) -> Self {
        Self {
            arena: SlotArena::with_capacity(options.initial_capacity()),
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    pub fn options(&self) -> TableOptions {
        self.options
    }

    /// Heap bytes held by the table's arrays.
    pub fn memory_usage(&self) -> usize {
        self.arena.memory_usage()
    }

    /// Adds `key -> value`; returns `true` only if the map grew.
    pub fn add(&mut self, key: i32, value: i32) -> bool {
        if key == EMPTY || value == EMPTY {
            return false;
        }
        self.arena.reserve_slot();
        let legacy = self.options.check() == DuplicateCheck::Legacy;
        self.arena
            .insert(key, value, |&k, &v, position| {
                if k == key {
                    Verdict::Replace
                } else if legacy && position == Position::Interior && v == value {
                    Verdict::Duplicate
                } else {
                    Verdict::Continue
                }
            })
            .is_appended()
    }

    pub fn contains(&self, key: i32) -> bool {
        self.arena.find(key, |_| true).is_some()
    }

    pub fn get(&self, key: i32) -> Option<i32> {
        self.arena
            .find(key, |_| true)
            .map(|slot| *self.arena.value(slot))
    }

    pub fn remove(&mut self, key: i32) -> bool {
        self.arena.unlink(key, |_| true).is_some()
    }

    /// Removes everything. Arrays that grew are shrunk back to the initial
    /// capacity.
    pub fn clear(&mut self) {
        self.arena.reset(self.options.initial_capacity());
    }

    #[cfg(test)]
    pub(crate) fn validate(&self) -> Result<(), String> {
        self.arena.validate()
    }
}

impl Default for IntIntHashMap {
    fn default() -> Self {
        Self::from_options(TableOptions::default())
    }
}

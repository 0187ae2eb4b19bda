//! IntObjHashMap: `i32 -> V` map with the same layout as `IntIntHashMap`.

use crate::arena::{Inserted, SlotArena, Verdict, EMPTY};
use crate::options::{CapacityError, TableOptions};

/// Chained hash map from `i32` keys to arbitrary values.
///
/// Keys follow the same rules as [`IntIntHashMap`](crate::IntIntHashMap):
/// `-1` is rejected and adding an existing key replaces its value. Values
/// have no sentinel and are never compared, so the duplicate-check option
/// does not apply.
#[derive(Clone, Debug)]
pub struct IntObjHashMap<V> {
    arena: SlotArena<i32, Option<V>>,
    options: TableOptions,
}

impl<V> IntObjHashMap<V> {
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

    pub fn memory_usage(&self) -> usize {
        self.arena.memory_usage()
    }

    /// Adds `key -> value`. Returns `false` when the key was already present
    /// (its value is replaced) or is the sentinel.
    pub fn add(&mut self, key: i32, value: V) -> bool {
        matches!(self.insert(key, value), Some(None))
    }

    /// Like `add`, but hands back the value that was replaced.
    ///
    /// `None` means the key is the sentinel and nothing was stored;
    /// `Some(None)` means a new entry was appended.
    pub fn insert(&mut self, key: i32, value: V) -> Option<Option<V>> {
        if key == EMPTY {
            return None;
        }
        self.arena.reserve_slot();
        let inserted = self.arena.insert(key, Some(value), |&k, _, _| {
            if k == key {
                Verdict::Replace
            } else {
                Verdict::Continue
            }
        });
        match inserted {
            Inserted::Appended(_) => Some(None),
            Inserted::Replaced { previous, .. } => Some(previous),
            Inserted::Duplicate(_) => unreachable!("key-only judge never reports duplicates"),
        }
    }

    pub fn contains(&self, key: i32) -> bool {
        self.arena.find(key, |_| true).is_some()
    }

    pub fn get(&self, key: i32) -> Option<&V> {
        let slot = self.arena.find(key, |_| true)?;
        self.arena.value(slot).as_ref()
    }

    pub fn get_mut(&mut self, key: i32) -> Option<&mut V> {
        let slot = self.arena.find(key, |_| true)?;
        self.arena.value_mut(slot).as_mut()
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: i32) -> Option<V> {
        self.arena.unlink(key, |_| true).flatten()
    }

    pub fn clear(&mut self) {
        self.arena.reset(self.options.initial_capacity());
    }

    #[cfg(test)]
    pub(crate) fn validate(&self) -> Result<(), String> {
        self.arena.validate()
    }
}

impl<V> Default for IntObjHashMap<V> {
    fn default() -> Self {
        Self::from_options(TableOptions::default())
    }
}

//! CompactStringHashSet: two `i32` fingerprints per member, with removal.

use crate::arena::{pair_verdict, SlotArena};
use crate::fingerprint::CompactFingerprint;
use crate::options::{CapacityError, TableOptions};

/// Leaner variant of [`StringHashSet`](crate::StringHashSet): both
/// projections are `i32`, the first one selects the bucket, and members can
/// be removed.
///
/// The same false-positive caveat applies: membership is decided by the
/// [`CompactFingerprint`] alone.
#[derive(Clone, Debug)]
pub struct CompactStringHashSet {
    arena: SlotArena<i32, i32>,
    options: TableOptions,
}

impl CompactStringHashSet {
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

    pub fn add(&mut self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        self.arena.reserve_slot();
        let fp = CompactFingerprint::of(s);
        let check = self.options.check();
        self.arena
            .insert(fp.first, fp.second, |first, second, position| {
                pair_verdict(check, (first, second), (&fp.first, &fp.second), position)
            })
            .is_appended()
    }

    pub fn contains(&self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        let fp = CompactFingerprint::of(s);
        self.arena
            .find(fp.first, |&second| second == fp.second)
            .is_some()
    }

    pub fn remove(&mut self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        let fp = CompactFingerprint::of(s);
        self.arena
            .unlink(fp.first, |&second| second == fp.second)
            .is_some()
    }

    pub fn clear(&mut self) {
        self.arena.reset(self.options.initial_capacity());
    }

    #[cfg(test)]
    pub(crate) fn validate(&self) -> Result<(), String> {
        self.arena.validate()
    }
}

impl Default for CompactStringHashSet {
    fn default() -> Self {
        Self::from_options(TableOptions::default())
    }
}

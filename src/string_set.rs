//! StringHashSet: approximate string membership keyed by a wide checksum.

use crate::arena::{pair_verdict, SlotArena};
use crate::fingerprint::Fingerprint;
use crate::options::{CapacityError, TableOptions};

/// Set of strings that keeps only a [`Fingerprint`] per member.
///
/// Buckets are selected by the wide (Adler-32) projection; the narrow hash
/// disambiguates within a chain. Two different strings with equal
/// fingerprints are indistinguishable, so `contains` may report a string
/// that was never added. Members cannot be removed individually; see
/// [`CompactStringHashSet`](crate::CompactStringHashSet) for that.
///
/// The empty string is never a member.
#[derive(Clone, Debug)]
pub struct StringHashSet {
    arena: SlotArena<i64, i32>,
    options: TableOptions,
}

impl StringHashSet {
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

    /// Adds `s`; returns `true` if the set grew.
    pub fn add(&mut self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        self.arena.reserve_slot();
        let fp = Fingerprint::of(s);
        let check = self.options.check();
        self.arena
            .insert(fp.wide, fp.narrow, |wide, narrow, position| {
                pair_verdict(check, (wide, narrow), (&fp.wide, &fp.narrow), position)
            })
            .is_appended()
    }

    pub fn contains(&self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        let fp = Fingerprint::of(s);
        self.arena
            .find(fp.wide, |&narrow| narrow == fp.narrow)
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

impl Default for StringHashSet {
    fn default() -> Self {
        Self::from_options(TableOptions::default())
    }
}

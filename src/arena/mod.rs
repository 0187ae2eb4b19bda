//! SlotArena: parallel-array storage plus the bucket index shared by every table.
//!
//! An arena owns four arrays of equal length (the capacity):
//! - `heads[b]`: first slot of bucket `b`'s chain, or `NIL`.
//! - `keys[s]` / `values[s]`: the identity and payload fields of slot `s`.
//! - `next[s]`: the slot following `s` in its chain, or `NIL`.
//!
//! Slots are handed out by a bump cursor and never reused individually;
//! only a rehash (see `growth`) or a `clear` hands back space. `len` counts
//! the slots reachable from some bucket head and is tracked separately from
//! the cursor so that a removal can never cause a live slot to be reused.

mod chain;
mod growth;

pub(crate) use chain::{pair_verdict, Inserted, Position, Verdict};

use core::iter;
use core::mem;
use tracing::trace;

/// Sentinel held by every empty `i32` field; never a valid key, value or fingerprint.
pub const EMPTY: i32 = -1;

/// Sentinel held by every empty `i64` field.
pub const EMPTY_WIDE: i64 = -1;

/// End-of-chain marker for slot links.
pub(crate) const NIL: u32 = u32::MAX;

/// Largest capacity addressable with `u32` slot links.
pub const MAX_CAPACITY: usize = NIL as usize;

/// A field type with a reserved "nothing stored here" value.
pub(crate) trait Vacant {
    fn vacant() -> Self;
}

impl Vacant for i32 {
    #[inline]
    fn vacant() -> Self {
        EMPTY
    }
}

impl Vacant for i64 {
    #[inline]
    fn vacant() -> Self {
        EMPTY_WIDE
    }
}

impl<T> Vacant for Option<T> {
    #[inline]
    fn vacant() -> Self {
        None
    }
}

/// Identity field that selects a bucket: `|key mod buckets|`.
pub(crate) trait BucketKey: Copy + Eq + Vacant {
    fn bucket(self, buckets: usize) -> usize;
}

impl BucketKey for i32 {
    #[inline]
    fn bucket(self, buckets: usize) -> usize {
        (i64::from(self) % buckets as i64).unsigned_abs() as usize
    }
}

impl BucketKey for i64 {
    #[inline]
    fn bucket(self, buckets: usize) -> usize {
        (self % buckets as i64).unsigned_abs() as usize
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SlotArena<K, V> {
    heads: Vec<u32>,
    keys: Vec<K>,
    values: Vec<V>,
    next: Vec<u32>,
    cursor: usize,
    len: usize,
}

/// Slot indices along one chain, head first.
pub(crate) struct Chain<'a> {
    next: &'a [u32],
    at: u32,
}

impl Iterator for Chain<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.at == NIL {
            return None;
        }
        let slot = self.at as usize;
        self.at = self.next[slot];
        Some(slot)
    }
}

impl<K: BucketKey, V: Vacant> SlotArena<K, V> {
    /// Allocates `capacity` sentinel-filled slots and buckets.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        debug_assert!(
            (1..=MAX_CAPACITY).contains(&capacity),
            "arena capacity out of range: {capacity}"
        );
        Self {
            heads: vec![NIL; capacity],
            keys: iter::repeat_with(K::vacant).take(capacity).collect(),
            values: iter::repeat_with(V::vacant).take(capacity).collect(),
            next: vec![NIL; capacity],
            cursor: 0,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.heads.len()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn bucket_of(&self, key: K) -> usize {
        key.bucket(self.capacity())
    }

    #[inline]
    pub(crate) fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            next: &self.next,
            at: self.heads[bucket],
        }
    }

    #[inline]
    pub(crate) fn value(&self, slot: usize) -> &V {
        &self.values[slot]
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, slot: usize) -> &mut V {
        &mut self.values[slot]
    }

    /// Resets every array to the sentinel without reallocating.
    pub(crate) fn wipe(&mut self) {
        self.heads.fill(NIL);
        self.next.fill(NIL);
        self.keys.iter_mut().for_each(|k| *k = K::vacant());
        self.values.iter_mut().for_each(|v| *v = V::vacant());
        self.cursor = 0;
        self.len = 0;
    }

    /// Empties the arena. Arrays that grew past `initial_capacity` are
    /// replaced; otherwise they are wiped in place.
    pub(crate) fn reset(&mut self, initial_capacity: usize) {
        if self.capacity() > initial_capacity {
            trace!(
                from = self.capacity(),
                to = initial_capacity,
                "reallocating cleared arena"
            );
            *self = Self::with_capacity(initial_capacity);
        } else {
            self.wipe();
        }
    }

    /// Heap bytes held by the four arrays.
    pub(crate) fn memory_usage(&self) -> usize {
        self.heads.capacity() * mem::size_of::<u32>()
            + self.next.capacity() * mem::size_of::<u32>()
            + self.keys.capacity() * mem::size_of::<K>()
            + self.values.capacity() * mem::size_of::<V>()
    }

    /// Walks every chain and reports the first structural violation.
    ///
    /// Checked: links stay below the cursor, indices strictly increase from
    /// head to tail (which also rules out cycles), no slot is linked twice,
    /// every key hashes to the bucket it is chained under, and the number of
    /// reachable slots equals `len`.
    #[cfg(any(test, debug_assertions))]
    pub(crate) fn validate(&self) -> Result<(), String> {
        let mut linked = vec![false; self.capacity()];
        let mut reachable = 0usize;
        for bucket in 0..self.capacity() {
            let mut prev: Option<usize> = None;
            for slot in self.chain(bucket) {
                if slot >= self.cursor {
                    return Err(format!(
                        "bucket {bucket}: slot {slot} at or beyond cursor {}",
                        self.cursor
                    ));
                }
                if let Some(p) = prev {
                    if slot <= p {
                        return Err(format!("bucket {bucket}: slot {slot} chained after {p}"));
                    }
                }
                if mem::replace(&mut linked[slot], true) {
                    return Err(format!("slot {slot} is linked from more than one place"));
                }
                let home = self.bucket_of(self.keys[slot]);
                if home != bucket {
                    return Err(format!(
                        "slot {slot} belongs to bucket {home} but is chained under {bucket}"
                    ));
                }
                reachable += 1;
                prev = Some(slot);
            }
        }
        if reachable != self.len {
            return Err(format!("{reachable} reachable slots but len is {}", self.len));
        }
        Ok(())
    }
}

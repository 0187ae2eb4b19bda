//! Chain walks over a `SlotArena`: lookup, tail append, and unlink.

use super::{BucketKey, SlotArena, Vacant, NIL};
use crate::options::DuplicateCheck;
use core::mem;

/// Where a scanned slot sits in its chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Position {
    Interior,
    Tail,
}

/// Decision taken by an `insert` judge for one scanned slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// Not a match; keep walking.
    Continue,
    /// Treat the incoming entry as already present.
    Duplicate,
    /// Overwrite this slot's payload with the incoming one.
    Replace,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Inserted<V> {
    Appended(usize),
    Replaced { slot: usize, previous: V },
    Duplicate(usize),
}

impl<V> Inserted<V> {
    #[inline]
    pub(crate) fn is_appended(&self) -> bool {
        matches!(self, Self::Appended(_))
    }
}

/// Duplicate rule for tables whose identity is the whole `(key, payload)` pair.
///
/// `Legacy` suppresses the insert as soon as an interior slot carries the same
/// payload, whatever its key; only the tail slot is compared on both fields.
pub(crate) fn pair_verdict<K: Eq, V: Eq>(
    check: DuplicateCheck,
    slot: (&K, &V),
    incoming: (&K, &V),
    position: Position,
) -> Verdict {
    let same_payload = slot.1 == incoming.1;
    let legacy_interior = check == DuplicateCheck::Legacy && position == Position::Interior;
    if same_payload && (legacy_interior || slot.0 == incoming.0) {
        Verdict::Duplicate
    } else {
        Verdict::Continue
    }
}

impl<K: BucketKey, V: Vacant> SlotArena<K, V> {
    /// First slot in `key`'s chain whose key equals `key` and whose payload
    /// satisfies `matches`.
    pub(crate) fn find<F>(&self, key: K, mut matches: F) -> Option<usize>
    where
        F: FnMut(&V) -> bool,
    {
        self.chain(self.bucket_of(key))
            .find(|&slot| self.keys[slot] == key && matches(&self.values[slot]))
    }

    /// Walks `key`'s chain asking `judge` about every slot, then appends the
    /// entry at the tail if no slot claimed it.
    ///
    /// The caller must have reserved a free slot beforehand.
    pub(crate) fn insert<F>(&mut self, key: K, value: V, mut judge: F) -> Inserted<V>
    where
        F: FnMut(&K, &V, Position) -> Verdict,
    {
        let bucket = self.bucket_of(key);
        let mut tail = None;
        let mut at = self.heads[bucket];
        while at != NIL {
            let slot = at as usize;
            let position = if self.next[slot] == NIL {
                Position::Tail
            } else {
                Position::Interior
            };
            match judge(&self.keys[slot], &self.values[slot], position) {
                Verdict::Continue => {}
                Verdict::Duplicate => return Inserted::Duplicate(slot),
                Verdict::Replace => {
                    let previous = mem::replace(&mut self.values[slot], value);
                    return Inserted::Replaced { slot, previous };
                }
            }
            tail = Some(slot);
            at = self.next[slot];
        }
        Inserted::Appended(self.append(bucket, tail, key, value))
    }

    /// Appends without any duplicate check. Used when every entry is known
    /// to be distinct, e.g. while rehashing.
    pub(crate) fn push(&mut self, key: K, value: V) -> usize {
        let bucket = self.bucket_of(key);
        let tail = self.chain(bucket).last();
        self.append(bucket, tail, key, value)
    }

    fn append(&mut self, bucket: usize, tail: Option<usize>, key: K, value: V) -> usize {
        let slot = self.cursor;
        debug_assert!(slot < self.capacity(), "append without a reserved slot");
        self.keys[slot] = key;
        self.values[slot] = value;
        self.next[slot] = NIL;
        match tail {
            Some(t) => self.next[t] = slot as u32,
            None => self.heads[bucket] = slot as u32,
        }
        self.cursor += 1;
        self.len += 1;
        slot
    }

    /// Unlinks the first slot in `key`'s chain matching `key` and `matches`,
    /// moving its payload out.
    ///
    /// A removed head repoints its bucket at its successor; a removed head
    /// with no successor also has its key reset. Anything else is spliced out
    /// by relinking its predecessor. The slot itself is not reclaimed.
    pub(crate) fn unlink<F>(&mut self, key: K, mut matches: F) -> Option<V>
    where
        F: FnMut(&V) -> bool,
    {
        let bucket = self.bucket_of(key);
        let mut prev: Option<usize> = None;
        let mut at = self.heads[bucket];
        while at != NIL {
            let slot = at as usize;
            if self.keys[slot] == key && matches(&self.values[slot]) {
                let successor = self.next[slot];
                match prev {
                    None => {
                        self.heads[bucket] = successor;
                        if successor == NIL {
                            self.keys[slot] = K::vacant();
                        }
                    }
                    Some(p) => self.next[p] = successor,
                }
                self.len -= 1;
                return Some(mem::replace(&mut self.values[slot], V::vacant()));
            }
            prev = Some(slot);
            at = self.next[slot];
        }
        None
    }
}

//! Growth: full rehash into freshly allocated arrays.

use super::{BucketKey, SlotArena, Vacant, MAX_CAPACITY, NIL};
use core::mem;
use tracing::debug;

/// Next capacity after `capacity`: 50% larger, always at least one more.
///
/// # Panics
/// If the arena is already at `MAX_CAPACITY`.
pub(crate) fn grown_capacity(capacity: usize) -> usize {
    assert!(capacity < MAX_CAPACITY, "capacity overflow");
    let grown = (capacity as u64) * 3 / 2 + 1;
    grown.min(MAX_CAPACITY as u64) as usize
}

impl<K: BucketKey, V: Vacant> SlotArena<K, V> {
    /// Makes room so that the slot at the cursor can be filled while one
    /// slot stays spare.
    ///
    /// Rehashing at the current capacity is enough when removals left at
    /// least half the arena unreachable; otherwise the arena grows.
    pub(crate) fn reserve_slot(&mut self) {
        let capacity = self.capacity();
        if self.cursor + 1 < capacity {
            return;
        }
        let grow = self.len.saturating_mul(2).saturating_add(2) > capacity;
        let target = if grow {
            grown_capacity(capacity)
        } else {
            capacity
        };
        debug!(
            from = capacity,
            to = target,
            live = self.len,
            unlinked = self.cursor - self.len,
            grow,
            "rehashing slot arena"
        );
        self.rehash(target);
    }

    /// Moves every reachable entry into new arrays of `capacity` slots.
    ///
    /// Entries are reinserted by identity without any duplicate check, so
    /// distinct keys sharing a payload all survive.
    pub(crate) fn rehash(&mut self, capacity: usize) {
        let mut fresh = Self::with_capacity(capacity);
        for bucket in 0..self.capacity() {
            let mut at = self.heads[bucket];
            while at != NIL {
                let slot = at as usize;
                at = self.next[slot];
                let value = mem::replace(&mut self.values[slot], V::vacant());
                fresh.push(self.keys[slot], value);
            }
        }
        debug_assert_eq!(fresh.len, self.len, "rehash lost entries");
        #[cfg(debug_assertions)]
        {
            if let Err(violation) = fresh.validate() {
                panic!("rehash produced a corrupt arena: {violation}");
            }
        }
        *self = fresh;
    }
}

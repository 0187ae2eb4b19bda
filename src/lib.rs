//! compact-hash: memory-compact chained hash tables built directly on
//! parallel primitive arrays.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: store integer maps and string sets with a handful of bytes per
//!   entry and no per-entry allocation.
//! - Layers:
//!   - SlotArena<K, V>: four parallel arrays (bucket heads, keys, payloads,
//!     next links) addressed by a shared slot index. Chains are singly
//!     linked through `next`; new entries are appended at the chain tail.
//!   - Growth: when only one free slot is left, every reachable entry is
//!     reinserted into fresh arrays 50% larger (or the same size when
//!     removals freed at least half of the arena).
//!   - Tables: `IntIntHashMap`, `IntObjHashMap<V>`, `StringHashSet` and
//!     `CompactStringHashSet` decide what identity and payload mean and
//!     which slots count as duplicates.
//!
//! Constraints
//! - Single-threaded: no locking or atomics. Tables are plain owned data;
//!   shared use across threads needs external synchronization.
//! - `-1` is the sentinel in every `i32`/`i64` field and is rejected as an
//!   integer key or value.
//! - Slots are allocated by a bump cursor and never reused individually.
//!   Removal only relinks chains; space comes back on rehash or `clear`.
//! - No ordered traversal, no iteration, no shrinking on removal.
//!
//! String sets
//! - Strings are never stored. Each is reduced to two hash projections (see
//!   `fingerprint`); membership compares those. Two distinct strings with the
//!   same projections are indistinguishable, so `contains` can report a
//!   false positive. That is accepted in exchange for the footprint.
//!
//! Duplicate detection
//! - `DuplicateCheck::Legacy` (default) keeps the historical chain scan that
//!   compares only payloads on interior slots; `DuplicateCheck::Exact`
//!   compares the full identity everywhere. Rehashing never runs either rule:
//!   entries move by identity, so growth cannot drop distinct entries.
//!
//! Debugging
//! - In debug builds every rehash validates the new arena's chains
//!   (acyclic, strictly increasing slot order, correct buckets, reachable
//!   count equal to `len`) and panics on violation.

mod arena;
mod compact_string_set;
pub mod fingerprint;
mod int_int_map;
mod int_map_proptest;
mod int_obj_map;
mod options;
mod string_set;

// Public surface
pub use arena::{EMPTY, EMPTY_WIDE, MAX_CAPACITY};
pub use compact_string_set::CompactStringHashSet;
pub use int_int_map::IntIntHashMap;
pub use int_obj_map::IntObjHashMap;
pub use options::{CapacityError, DuplicateCheck, TableOptions, DEFAULT_CAPACITY};
pub use string_set::StringHashSet;

//! Construction options shared by every table.

use crate::arena::MAX_CAPACITY;

/// Capacity used by the `Default` impls.
pub const DEFAULT_CAPACITY: usize = 16;

/// How `add` decides that an entry is already present.
///
/// Tables identify an entry by two fields: the bucket key and a payload
/// (the map value, or the second string fingerprint). While walking a chain
/// the `Legacy` rule compares only the payload of interior slots and checks
/// both fields on the tail slot, so a new entry whose payload equals that of
/// an unrelated interior slot is silently dropped. `Exact` always compares
/// the full identity.
///
/// The integer map overwrites on an exact key match under either rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicateCheck {
    #[default]
    Legacy,
    Exact,
}

/// Rejected construction options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CapacityError {
    #[error("initial capacity must be at least 1")]
    Zero,
    #[error("initial capacity {requested} exceeds the maximum of {max}")]
    TooLarge { requested: usize, max: usize },
}

/// Initial capacity and duplicate rule for a table.
///
/// ```
/// use compact_hash::{DuplicateCheck, IntIntHashMap, TableOptions};
///
/// let options = TableOptions::new(64).duplicate_check(DuplicateCheck::Exact);
/// let map = IntIntHashMap::with_options(options).unwrap();
/// assert_eq!(map.capacity(), 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableOptions {
    initial_capacity: usize,
    duplicate_check: DuplicateCheck,
}

impl TableOptions {
    pub const fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            duplicate_check: DuplicateCheck::Legacy,
        }
    }

    pub const fn duplicate_check(self, check: DuplicateCheck) -> Self {
        Self {
            duplicate_check: check,
            ..self
        }
    }

    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub const fn check(&self) -> DuplicateCheck {
        self.duplicate_check
    }

    /// Same options with the capacity forced into `1..=MAX_CAPACITY`.
    pub(crate) fn clamped(self) -> Self {
        Self {
            initial_capacity: self.initial_capacity.clamp(1, MAX_CAPACITY),
            ..self
        }
    }

    pub(crate) fn validate(self) -> Result<Self, CapacityError> {
        match self.initial_capacity {
            0 => Err(CapacityError::Zero),
            n if n > MAX_CAPACITY => Err(CapacityError::TooLarge {
                requested: n,
                max: MAX_CAPACITY,
            }),
            _ => Ok(self),
        }
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

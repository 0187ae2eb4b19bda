//! String fingerprints: pairs of hash projections that stand in for a string.
//!
//! Sets built on these never store string bytes. Two strings are treated as
//! the same member when both projections agree, which makes a false positive
//! on `contains` possible but rare. Every function here is pure; nothing is
//! cached between calls.

use crate::arena::{EMPTY, EMPTY_WIDE};

/// Adler-32 of the UTF-8 bytes, widened to `i64`.
#[inline]
pub fn wide(s: &str) -> i64 {
    let value = i64::from(adler2::adler32_slice(s.as_bytes()));
    if value == EMPTY_WIDE {
        0
    } else {
        value
    }
}

/// Adler-32 of the UTF-8 bytes, reinterpreted as `i32`.
#[inline]
pub fn checksum(s: &str) -> i32 {
    avoid_empty(adler2::adler32_slice(s.as_bytes()) as i32)
}

/// Polynomial hash (multiplier 31, wrapping) over the UTF-16 code units.
#[inline]
pub fn narrow(s: &str) -> i32 {
    let h = s
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    avoid_empty(h)
}

#[inline]
fn avoid_empty(h: i32) -> i32 {
    if h == EMPTY {
        0
    } else {
        h
    }
}

/// Wide checksum plus narrow hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub wide: i64,
    pub narrow: i32,
}

impl Fingerprint {
    pub fn of(s: &str) -> Self {
        Self {
            wide: wide(s),
            narrow: narrow(s),
        }
    }
}

/// Two `i32` projections; `first` selects the bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompactFingerprint {
    pub first: i32,
    pub second: i32,
}

impl CompactFingerprint {
    pub fn of(s: &str) -> Self {
        Self {
            first: checksum(s),
            second: narrow(s),
        }
    }
}

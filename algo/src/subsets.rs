//! Subset enumerator (spec §4.2).
//!
//! Enumerates every non-empty subset of a set exactly once, via a bitmask
//! over the set's elements (deterministic given a deterministic iteration
//! order over the input). Bounded to `|S| ≤ 63`, the bit-width the
//! candidate-key finder's gate (spec §4.3, §5) relies on.

use alloc::vec::Vec;
use schema_core::{Attribute, AttributeSet};

/// The enumerator refuses to run past this many elements; `u64` has 64
/// bits and we reserve one so `1u64 << len` never overflows when `len`
/// itself is used as a shift count in the exclusive bound.
pub const MAX_ENUMERABLE_ATTRIBUTES: usize = 63;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TooManyAttributes {
    pub len: usize,
    pub max: usize,
}

/// Enumerate every non-empty subset of `s`, yielding each exactly once.
///
/// The order of yield is a bitmask sweep from `1` to `2^|s| - 1` over a
/// fixed (sorted) ordering of `s`'s elements — deterministic, not
/// contractually meaningful otherwise (spec §4.2).
pub fn non_empty_subsets(s: &AttributeSet) -> Result<Vec<AttributeSet>, TooManyAttributes> {
    let elems: Vec<Attribute> = s.iter().cloned().collect();
    let len = elems.len();
    if len > MAX_ENUMERABLE_ATTRIBUTES {
        return Err(TooManyAttributes {
            len,
            max: MAX_ENUMERABLE_ATTRIBUTES,
        });
    }
    if len == 0 {
        return Ok(Vec::new());
    }

    let total: u64 = 1u64 << len;
    let mut out = Vec::with_capacity((total - 1) as usize);
    for mask in 1..total {
        let mut subset = AttributeSet::new();
        for (i, a) in elems.iter().enumerate() {
            if mask & (1u64 << i) != 0 {
                subset.insert(a.clone());
            }
        }
        out.push(subset);
    }
    Ok(out)
}

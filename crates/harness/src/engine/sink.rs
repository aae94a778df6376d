//! Optimization barrier for the measured traversal.
//!
//! A pass reads field `a` of every visited record and sums it. Nothing else
//! uses that sum, so without a barrier the optimizer is free to delete the
//! whole loop. Both the inputs and the result are routed through
//! [`std::hint::black_box`], and the pass itself is kept out of line, so every
//! load in the loop must be performed.

use std::hint::black_box;

use crate::store::Record;

/// Walks `indices` in order and returns the wrapping sum of `records[i].a`.
///
/// The walk is sequential and never exits early. Every index must be in
/// range for `records`; an out-of-range index panics rather than reading
/// outside the array.
#[inline(never)]
pub fn traverse(records: &[Record], indices: &[usize]) -> u64 {
    let records = black_box(records);
    let indices = black_box(indices);

    let mut sum = 0u64;
    for &index in indices {
        sum = sum.wrapping_add(u64::from(records[index].a));
    }
    sum
}

/// Marks `value` as observed, so the computation that produced it is kept.
#[inline(never)]
pub fn consume(value: u64) -> u64 {
    black_box(value)
}

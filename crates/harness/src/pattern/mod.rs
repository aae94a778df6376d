//! Index-sequence generation.
//!
//! Every pattern visits the same set of offsets `{0, s, 2s, …, (count-1)·s}`
//! for stride `s`; only the order differs. Keeping the visited set identical is
//! what makes timings comparable across patterns.
//!
//! # Odd counts
//!
//! Interleaved and Bouncing split the sequence into two halves. When `count`
//! is odd the first (low-offset) half holds `ceil(count/2)` elements and the
//! second half `floor(count/2)`. Both generators place the extra element in the
//! final slot, taken from the low half, so no offset is dropped or repeated.
//!
//! # Seeding
//!
//! Random shuffles with a generator seeded from the shuffle seed on every call,
//! so it yields the same permutation each time it is generated and in every
//! process.

/// Reusable, fully rewritten offset buffer.
pub mod index_buffer;

use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use thiserror::Error;

pub use self::index_buffer::IndexBuffer;

/// An ordering of the stride offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pattern {
    /// `0, s, 2s, …` ascending.
    Sequential,
    /// The Sequential offsets in descending order.
    Backward,
    /// Two ascending half-streams woven together: low, high, low, high, …
    Interleaved,
    /// A forward cursor from the low end alternating with a backward cursor
    /// from the high end.
    Bouncing,
    /// A seeded uniform permutation of the Sequential offsets.
    Random,
}

impl Pattern {
    /// All patterns in report order.
    pub const ALL: [Self; 5] = [
        Self::Sequential,
        Self::Backward,
        Self::Interleaved,
        Self::Bouncing,
        Self::Random,
    ];

    /// Name used in the text and CSV report.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "Sequential",
            Self::Backward => "Backward",
            Self::Interleaved => "Interleaved",
            Self::Bouncing => "Bouncing",
            Self::Random => "Random",
        }
    }

    /// Writes this pattern's offsets into every slot of `out`.
    ///
    /// `out.len()` is the offset count; each value is a multiple of `stride`
    /// below `out.len() * stride`.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination, fully overwritten.
    /// * `stride` - Distance in records between offsets.
    /// * `shuffle_seed` - Seed for [`Pattern::Random`]; ignored by the others.
    pub fn fill(self, out: &mut [usize], stride: usize, shuffle_seed: u64) {
        match self {
            Self::Sequential => fill_sequential(out, stride),
            Self::Backward => fill_backward(out, stride),
            Self::Interleaved => fill_interleaved(out, stride),
            Self::Bouncing => fill_bouncing(out, stride),
            Self::Random => fill_random(out, stride, shuffle_seed),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a pattern name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pattern `{0}` (expected one of: sequential, backward, interleaved, bouncing, random)")]
pub struct UnknownPattern(pub String);

impl FromStr for Pattern {
    type Err = UnknownPattern;

    /// Parses a pattern name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPattern(s.to_string()))
    }
}

/// Generates `count` offsets for `pattern` into a fresh vector.
pub fn generate(pattern: Pattern, count: usize, stride: usize, shuffle_seed: u64) -> Vec<usize> {
    let mut out = vec![0; count];
    pattern.fill(&mut out, stride, shuffle_seed);
    out
}

fn fill_sequential(out: &mut [usize], stride: usize) {
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = i * stride;
    }
}

fn fill_backward(out: &mut [usize], stride: usize) {
    let count = out.len();
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = (count - 1 - i) * stride;
    }
}

fn fill_interleaved(out: &mut [usize], stride: usize) {
    // Low half is the larger one when count is odd.
    let low_len = out.len().div_ceil(2);
    for (i, slot) in out.iter_mut().enumerate() {
        let position = if i % 2 == 0 { i / 2 } else { low_len + i / 2 };
        *slot = position * stride;
    }
}

fn fill_bouncing(out: &mut [usize], stride: usize) {
    let count = out.len();
    for (i, slot) in out.iter_mut().enumerate() {
        let position = if i % 2 == 0 { i / 2 } else { count - 1 - i / 2 };
        *slot = position * stride;
    }
}

fn fill_random(out: &mut [usize], stride: usize, shuffle_seed: u64) {
    fill_sequential(out, stride);
    let mut rng = StdRng::seed_from_u64(shuffle_seed);
    out.shuffle(&mut rng);
}

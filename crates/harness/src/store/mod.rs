//! Record store.
//!
//! This module owns the array the benchmark walks over. It provides:
//! 1. **Record:** A 32-byte aggregate of eight `u32` fields, so each visit touches a real cache line.
//! 2. **Buffer:** Fallible, page-backed storage that is released on drop.
//! 3. **Initialization:** A seeded, reproducible fill that the optimizer cannot predict.
//!
//! The array is written once during construction and is read-only afterwards.

/// Owning storage behind the record array.
pub mod buffer;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;

use crate::error::Result;

pub use self::buffer::RecordBuffer;

/// One element of the benchmark array.
///
/// Only `a` is read during measurement; the remaining fields give the record
/// its 32-byte footprint.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    /// Field read by every traversal.
    pub a: u32,
    /// Padding payload.
    pub b: u32,
    /// Padding payload.
    pub c: u32,
    /// Padding payload.
    pub d: u32,
    /// Padding payload.
    pub e: u32,
    /// Padding payload.
    pub f: u32,
    /// Padding payload.
    pub g: u32,
    /// Padding payload.
    pub h: u32,
}

impl Record {
    /// Size of a record in bytes.
    pub const SIZE: usize = size_of::<Self>();

    /// Draws a record from `rng`, filling fields `a` through `h` in order.
    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        Self {
            a: rng.next_u32(),
            b: rng.next_u32(),
            c: rng.next_u32(),
            d: rng.next_u32(),
            e: rng.next_u32(),
            f: rng.next_u32(),
            g: rng.next_u32(),
            h: rng.next_u32(),
        }
    }
}

/// The immutable array of records every pattern is measured against.
#[derive(Debug)]
pub struct RecordArray {
    buffer: RecordBuffer,
    seed: u64,
}

impl RecordArray {
    /// Allocates `elements` records and fills them from a generator seeded with `seed`.
    ///
    /// The same `(elements, seed)` pair always yields the same contents.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Allocation`](crate::error::BenchError::Allocation)
    /// if the backing memory cannot be obtained.
    pub fn initialize(elements: usize, seed: u64) -> Result<Self> {
        let mut buffer = RecordBuffer::zeroed(elements)?;

        let mut rng = StdRng::seed_from_u64(seed);
        for record in buffer.as_mut_slice() {
            *record = Record::random(&mut rng);
        }

        info!(
            elements,
            bytes = elements * Record::SIZE,
            seed,
            mapped = buffer.is_mapped(),
            "record array initialized"
        );

        Ok(Self { buffer, seed })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the array holds no records.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Total size of the records in bytes.
    pub fn size_bytes(&self) -> usize {
        self.len() * Record::SIZE
    }

    /// Seed the contents were generated from.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only view of every record.
    pub fn as_slice(&self) -> &[Record] {
        self.buffer.as_slice()
    }

    /// The record at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.as_slice().get(index)
    }
}

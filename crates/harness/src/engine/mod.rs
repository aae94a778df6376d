//! Timed execution engine.
//!
//! This module runs the measurement protocol for one index sequence. It provides:
//! 1. **Warmup:** A fixed number of untimed full traversals to settle cache and TLB state.
//! 2. **Measurement:** A fixed number of timed full traversals, one millisecond sample each.
//! 3. **Barrier:** Every traversal result passes through [`sink::consume`], so no pass can be elided.
//!
//! Passes are strictly sequential and single-threaded; running them in
//! parallel would change the access stream the prefetcher observes.

/// Time sources.
pub mod clock;

/// Traversal loop and optimization barrier.
pub mod sink;

use tracing::debug;

use crate::config::BenchConfig;
use crate::stats::{self, Summary};
use crate::store::Record;

pub use self::clock::{Clock, MonotonicClock};

/// Elapsed times of the measured passes for one pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingSamples {
    samples: Vec<f64>,
    checksum: u64,
}

impl TimingSamples {
    /// Samples in milliseconds, in measurement order.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Number of measured passes.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no pass was measured.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sum produced by the last measured pass.
    pub const fn checksum(&self) -> u64 {
        self.checksum
    }

    /// Median of the samples (upper-middle element, see [`stats::median`]).
    pub fn median(&self) -> f64 {
        stats::median(&self.samples)
    }

    /// Minimum, median and maximum of the samples.
    pub fn summary(&self) -> Summary {
        Summary::from_samples(&self.samples)
    }
}

/// Runs warmup and measured passes against a clock.
#[derive(Debug, Clone)]
pub struct Engine<C = MonotonicClock> {
    clock: C,
    warmup_passes: usize,
    measured_passes: usize,
}

impl Engine<MonotonicClock> {
    /// Creates an engine timed by a fresh [`MonotonicClock`].
    pub fn new(warmup_passes: usize, measured_passes: usize) -> Self {
        Self::with_clock(MonotonicClock::new(), warmup_passes, measured_passes)
    }

    /// Creates an engine with the pass counts from `config`.
    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(config.warmup_passes, config.measured_passes)
    }
}

impl<C: Clock> Engine<C> {
    /// Creates an engine timed by `clock`.
    pub const fn with_clock(clock: C, warmup_passes: usize, measured_passes: usize) -> Self {
        Self {
            clock,
            warmup_passes,
            measured_passes,
        }
    }

    /// Number of untimed passes per measurement.
    pub const fn warmup_passes(&self) -> usize {
        self.warmup_passes
    }

    /// Number of timed passes per measurement.
    pub const fn measured_passes(&self) -> usize {
        self.measured_passes
    }

    /// Measures traversals of `records` in the order given by `indices`.
    ///
    /// Runs every warmup pass, then every measured pass, each over the full
    /// index sequence. Only the measured passes are timed.
    ///
    /// # Arguments
    ///
    /// * `records` - The array to read from.
    /// * `indices` - Offsets into `records`, visited in order.
    ///
    /// # Returns
    ///
    /// One sample per measured pass, in milliseconds.
    pub fn measure(&self, records: &[Record], indices: &[usize]) -> TimingSamples {
        for _ in 0..self.warmup_passes {
            let _ = sink::consume(sink::traverse(records, indices));
        }

        let mut samples = Vec::with_capacity(self.measured_passes);
        let mut checksum = 0;
        for _ in 0..self.measured_passes {
            let start = self.clock.now_ms();
            let sum = sink::traverse(records, indices);
            let end = self.clock.now_ms();

            checksum = sink::consume(sum);
            samples.push(end - start);
        }

        debug!(
            passes = samples.len(),
            warmup = self.warmup_passes,
            checksum,
            "timing samples collected"
        );

        TimingSamples { samples, checksum }
    }
}

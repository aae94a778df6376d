//! Benchmark orchestration.
//!
//! A [`Harness`] owns the record array, the shared index buffer and the engine.
//! Both buffers are allocated once in [`Harness::new`]; each pattern then
//! rewrites the index buffer in full and is measured against the same,
//! read-only array.

use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::engine::{Clock, Engine, MonotonicClock, TimingSamples};
use crate::error::Result;
use crate::pattern::{IndexBuffer, Pattern};
use crate::report::{PatternResult, Report};
use crate::store::RecordArray;

/// Runs access patterns against a single record array.
#[derive(Debug)]
pub struct Harness<C = MonotonicClock> {
    config: BenchConfig,
    store: RecordArray,
    indices: IndexBuffer,
    engine: Engine<C>,
}

impl Harness<MonotonicClock> {
    /// Validates `config` and allocates the array and index buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`](crate::error::BenchError::InvalidConfig)
    /// for an unrunnable configuration and
    /// [`BenchError::Allocation`](crate::error::BenchError::Allocation) if
    /// either buffer cannot be allocated.
    pub fn new(config: BenchConfig) -> Result<Self> {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> Harness<C> {
    /// Like [`Harness::new`], timing passes with `clock`.
    ///
    /// # Errors
    ///
    /// Same as [`Harness::new`].
    pub fn with_clock(config: BenchConfig, clock: C) -> Result<Self> {
        config.validate()?;

        let store = RecordArray::initialize(config.elements, config.data_seed)?;
        let indices = IndexBuffer::with_count(config.index_count())?;
        let engine = Engine::with_clock(clock, config.warmup_passes, config.measured_passes);

        Ok(Self {
            config,
            store,
            indices,
            engine,
        })
    }

    /// Configuration this harness runs with.
    pub const fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// The record array under measurement.
    pub const fn store(&self) -> &RecordArray {
        &self.store
    }

    /// The index buffer as left by the most recent pattern.
    pub const fn indices(&self) -> &IndexBuffer {
        &self.indices
    }

    /// Regenerates the index buffer for `pattern` and returns the raw samples.
    pub fn measure_pattern(&mut self, pattern: Pattern) -> TimingSamples {
        self.indices
            .fill(pattern, self.config.stride, self.config.shuffle_seed);
        self.engine
            .measure(self.store.as_slice(), self.indices.as_slice())
    }

    /// Measures `pattern` and reduces it to its median.
    pub fn run_pattern(&mut self, pattern: Pattern) -> PatternResult {
        let samples = self.measure_pattern(pattern);
        let summary = samples.summary();
        debug!(
            %pattern,
            min_ms = summary.min,
            max_ms = summary.max,
            "pattern sample spread"
        );

        let median_ms = samples.median();
        info!(%pattern, median_ms, "pattern measured");

        PatternResult { pattern, median_ms }
    }

    /// Runs `patterns` in order and collects their results.
    pub fn run(&mut self, patterns: &[Pattern]) -> Report {
        let mut report = Report::new(&self.config);
        for &pattern in patterns {
            report.push(self.run_pattern(pattern));
        }
        report
    }

    /// Runs all five patterns in report order.
    pub fn run_all(&mut self) -> Report {
        self.run(&Pattern::ALL)
    }
}

//! Configuration for the access-pattern benchmark.
//!
//! This module holds every constant the harness runs with. It provides:
//! 1. **Defaults:** The reference workload (128 MiB of records, stride 8, 3 + 10 passes).
//! 2. **Structure:** `BenchConfig`, deserializable from JSON for library callers.
//! 3. **Validation:** Rejection of shapes the generator and engine cannot run.
//!
//! The command-line entry point never reads a file or the environment; it starts
//! from `BenchConfig::default()` and applies explicit flags on top.

use serde::Deserialize;

use crate::error::{BenchError, Result};
use crate::store::Record;

/// Baseline constants for the reference workload.
mod defaults {
    /// Number of records in the store (4 Mi records, 128 MiB at 32 bytes each).
    pub const ELEMENTS: usize = 4 * 1024 * 1024;

    /// Distance in records between two visited offsets.
    ///
    /// Eight 32-byte records span 256 bytes, so consecutive visits never
    /// share a cache line.
    pub const STRIDE: usize = 8;

    /// Untimed passes run before measurement to settle cache and TLB state.
    pub const WARMUP_PASSES: usize = 3;

    /// Timed passes per pattern; the median of these is reported.
    pub const MEASURED_PASSES: usize = 10;

    /// Seed for the record contents.
    pub const DATA_SEED: u64 = 12345;

    /// Seed for the Random pattern's permutation.
    pub const SHUFFLE_SEED: u64 = 42;

    /// First line of the text report.
    pub const TITLE: &str = "Memory Access Pattern Benchmark (Rust)";
}

/// Root configuration for a benchmark run.
///
/// Every field is optional when deserializing; missing fields take the
/// reference defaults.
///
/// # Example
///
/// ```
/// use accessbench_core::config::BenchConfig;
///
/// let json = r#"{ "elements": 4096, "measured_passes": 5 }"#;
/// let config: BenchConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.elements, 4096);
/// assert_eq!(config.stride, 8);
/// assert_eq!(config.index_count(), 512);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BenchConfig {
    /// Number of records in the store.
    #[serde(default = "BenchConfig::default_elements")]
    pub elements: usize,
    /// Records between visited offsets.
    #[serde(default = "BenchConfig::default_stride")]
    pub stride: usize,
    /// Untimed passes per pattern.
    #[serde(default = "BenchConfig::default_warmup_passes")]
    pub warmup_passes: usize,
    /// Timed passes per pattern.
    #[serde(default = "BenchConfig::default_measured_passes")]
    pub measured_passes: usize,
    /// Seed for the store fill.
    #[serde(default = "BenchConfig::default_data_seed")]
    pub data_seed: u64,
    /// Seed for the Random pattern, applied afresh on every generation.
    #[serde(default = "BenchConfig::default_shuffle_seed")]
    pub shuffle_seed: u64,
    /// Title line printed at the top of the text report.
    #[serde(default = "BenchConfig::default_title")]
    pub title: String,
}

impl BenchConfig {
    fn default_elements() -> usize {
        defaults::ELEMENTS
    }

    fn default_stride() -> usize {
        defaults::STRIDE
    }

    fn default_warmup_passes() -> usize {
        defaults::WARMUP_PASSES
    }

    fn default_measured_passes() -> usize {
        defaults::MEASURED_PASSES
    }

    fn default_data_seed() -> u64 {
        defaults::DATA_SEED
    }

    fn default_shuffle_seed() -> u64 {
        defaults::SHUFFLE_SEED
    }

    fn default_title() -> String {
        defaults::TITLE.to_string()
    }

    /// Number of offsets each pattern visits (`elements / stride`).
    ///
    /// A trailing partial stride is not visited. Returns 0 for a zero stride;
    /// `validate` rejects that shape before anything is allocated.
    pub const fn index_count(&self) -> usize {
        if self.stride == 0 {
            0
        } else {
            self.elements / self.stride
        }
    }

    /// Size of the record store in bytes, or `None` if it overflows `usize`.
    pub const fn store_bytes(&self) -> Option<usize> {
        self.elements.checked_mul(size_of::<Record>())
    }

    /// Checks that the configuration describes a runnable workload.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] when there are no elements, the
    /// stride is zero or larger than the store, or no measured passes are
    /// requested.
    pub fn validate(&self) -> Result<()> {
        if self.elements == 0 {
            return Err(BenchError::InvalidConfig(
                "element count must be non-zero".to_string(),
            ));
        }
        if self.stride == 0 {
            return Err(BenchError::InvalidConfig(
                "stride must be non-zero".to_string(),
            ));
        }
        if self.elements < self.stride {
            return Err(BenchError::InvalidConfig(format!(
                "element count {} is smaller than the stride {}",
                self.elements, self.stride
            )));
        }
        if self.measured_passes == 0 {
            return Err(BenchError::InvalidConfig(
                "at least one measured pass is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            elements: Self::default_elements(),
            stride: Self::default_stride(),
            warmup_passes: Self::default_warmup_passes(),
            measured_passes: Self::default_measured_passes(),
            data_seed: Self::default_data_seed(),
            shuffle_seed: Self::default_shuffle_seed(),
            title: Self::default_title(),
        }
    }
}

//! Memory access-pattern benchmark library.
//!
//! This crate measures how hardware prefetchers respond to different orderings
//! of the same set of array accesses. It provides:
//! 1. **Store:** A 128 MiB array of 32-byte records filled from a seeded generator.
//! 2. **Patterns:** Sequential, Backward, Interleaved, Bouncing and Random offset sequences over one stride-8 set.
//! 3. **Engine:** Warmup and timed passes whose loads the optimizer cannot remove.
//! 4. **Stats:** Median reduction of the timed passes.
//! 5. **Report:** Text, CSV and JSON output of the per-pattern medians.
//!
//! ```no_run
//! use accessbench_core::{BenchConfig, Harness};
//!
//! let mut harness = Harness::new(BenchConfig::default())?;
//! let report = harness.run_all();
//! print!("{}", report.render_text());
//! # Ok::<(), accessbench_core::BenchError>(())
//! ```

/// Workload configuration and defaults.
pub mod config;
/// Timed execution engine (clock, traversal barrier, measurement loop).
pub mod engine;
/// Error type and result alias.
pub mod error;
/// Orchestration of a full run.
pub mod harness;
/// Index-sequence generation and the shared index buffer.
pub mod pattern;
/// Text, CSV and JSON reporting.
pub mod report;
/// Median reduction of timing samples.
pub mod stats;
/// Record array and its backing memory.
pub mod store;

/// Root configuration type; use `BenchConfig::default()` for the reference workload.
pub use crate::config::BenchConfig;
/// Error raised while setting up a run.
pub use crate::error::{BenchError, Result};
/// Runs patterns against one record array; construct with `Harness::new`.
pub use crate::harness::Harness;
/// The five access orderings.
pub use crate::pattern::Pattern;
/// Per-pattern result and full report.
pub use crate::report::{PatternResult, Report};

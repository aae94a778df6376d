//! Error types for the benchmark harness.
//!
//! Setup fails when the fixed-size buffers cannot be obtained from the operating
//! system or when a caller hands in a configuration the harness cannot run.
//! Index generation, timing, reduction and formatting are total; only handing
//! the finished report to its destination can fail afterwards.

use thiserror::Error;

/// Failure raised while setting up a benchmark run or emitting its report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchError {
    /// A buffer could not be allocated. Fatal; there is no degraded mode.
    #[error("memory allocation failed for {what} ({bytes} bytes)")]
    Allocation {
        /// Which buffer was being allocated.
        what: &'static str,
        /// Requested size in bytes (saturated at `usize::MAX` on overflow).
        bytes: usize,
    },

    /// The configuration describes a workload that cannot be run.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The finished report could not be serialized or written out.
    #[error("failed to write report: {0}")]
    Output(String),
}

impl BenchError {
    /// Process exit status the command-line entry point uses for this error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Allocation { .. } | Self::Output(_) => 1,
            Self::InvalidConfig(_) => 2,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BenchError>;

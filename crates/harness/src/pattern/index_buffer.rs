//! Index buffer shared by every pattern in a run.
//!
//! The buffer is allocated once and rewritten in full before each measurement,
//! so a pattern never sees offsets left over from the previous one.

use tracing::debug;

use super::Pattern;
use crate::error::{BenchError, Result};

/// Owned, fixed-length sequence of record offsets.
#[derive(Debug, Clone)]
pub struct IndexBuffer {
    offsets: Vec<usize>,
    pattern: Option<Pattern>,
}

impl IndexBuffer {
    /// Allocates a zeroed buffer of `count` offsets.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Allocation`] if the memory cannot be reserved.
    pub fn with_count(count: usize) -> Result<Self> {
        let mut offsets = Vec::new();
        offsets
            .try_reserve_exact(count)
            .map_err(|_| BenchError::Allocation {
                what: "index buffer",
                bytes: count.saturating_mul(size_of::<usize>()),
            })?;
        offsets.resize(count, 0);

        Ok(Self {
            offsets,
            pattern: None,
        })
    }

    /// Overwrites every slot with `pattern`'s offsets.
    pub fn fill(&mut self, pattern: Pattern, stride: usize, shuffle_seed: u64) {
        pattern.fill(&mut self.offsets, stride, shuffle_seed);
        self.pattern = Some(pattern);
        debug!(%pattern, count = self.offsets.len(), "index buffer filled");
    }

    /// The pattern the buffer currently holds, if it has been filled.
    pub const fn pattern(&self) -> Option<Pattern> {
        self.pattern
    }

    /// Number of offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if the buffer holds no offsets.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The offsets in visiting order.
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }
}

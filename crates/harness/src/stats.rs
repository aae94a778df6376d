//! Timing sample reduction.
//!
//! Repeated samples collapse to a median, which shrugs off the occasional
//! pass that was interrupted by the scheduler.

/// Median of `samples`: the element at index `n / 2` of the ascending sort.
///
/// For an even count this is the upper of the two middle values, not their
/// average; reference output depends on that choice. Empty input yields `0.0`.
///
/// # Example
///
/// ```
/// use accessbench_core::stats::median;
///
/// let samples = [5.0, 1.0, 3.0, 2.0, 4.0, 9.0, 8.0, 7.0, 6.0, 10.0];
/// assert_eq!(median(&samples), 6.0);
/// ```
pub fn median(samples: &[f64]) -> f64 {
    let sorted = sorted(samples);
    sorted.get(sorted.len() / 2).copied().unwrap_or(0.0)
}

/// Spread of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Smallest sample.
    pub min: f64,
    /// Upper-middle sample, as returned by [`median`].
    pub median: f64,
    /// Largest sample.
    pub max: f64,
}

impl Summary {
    /// Computes the summary from one sorted copy of `samples`.
    ///
    /// All fields are `0.0` for empty input.
    pub fn from_samples(samples: &[f64]) -> Self {
        let sorted = sorted(samples);
        let at = |i: Option<usize>| i.and_then(|i| sorted.get(i)).copied().unwrap_or(0.0);
        Self {
            min: at(Some(0)),
            median: at(Some(sorted.len() / 2)),
            max: at(sorted.len().checked_sub(1)),
        }
    }
}

fn sorted(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

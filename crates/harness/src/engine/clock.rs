//! Wall-clock source for timed passes.

use std::time::Instant;

/// A monotonic millisecond reading.
///
/// Readings are relative to an arbitrary fixed origin; only differences
/// between two readings from the same clock are meaningful.
pub trait Clock {
    /// Current reading in milliseconds.
    fn now_ms(&self) -> f64;
}

/// High-resolution clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

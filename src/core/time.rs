//! Simulation timing utilities

use serde::{Deserialize, Serialize};

/// Accumulated virtual time threaded through every tick.
///
/// All time-driven behavior (cloud age, drift, deferred actions, transient
/// effects) reads [`SimClock::elapsed`] rather than sampling a wall clock, so
/// tests can advance arbitrary amounts of time without real delays.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimClock {
    elapsed: f64,
    delta: f32,
    tick_count: u64,
}

impl SimClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds and return the new elapsed time.
    ///
    /// Negative or non-finite deltas are treated as zero.
    pub fn advance(&mut self, dt: f32) -> f64 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.delta = dt;
        self.elapsed += dt as f64;
        self.tick_count += 1;
        self.elapsed
    }

    /// Total elapsed seconds
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Total elapsed seconds as `f32`, for shader-style time values
    #[inline]
    pub fn elapsed_f32(&self) -> f32 {
        self.elapsed as f32
    }

    /// Delta of the most recent tick in seconds
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Number of ticks taken so far
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

//! Normalized day phase tracking with day counting.

use serde::{Deserialize, Serialize};

/// Phase at which sunrise begins.
pub const SUNRISE_START: f32 = 0.2;
/// Phase at which full daylight begins.
pub const DAY_START: f32 = 0.3;
/// Phase at which sunset begins.
pub const SUNSET_START: f32 = 0.7;
/// Phase at which dusk begins.
pub const DUSK_START: f32 = 0.8;

/// The five sub-bands of a day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayBand {
    /// `[0.0, 0.2)`
    Night,
    /// `[0.2, 0.3)`
    Sunrise,
    /// `[0.3, 0.7)`
    Daytime,
    /// `[0.7, 0.8)`
    Sunset,
    /// `[0.8, 1.0)`
    Dusk,
}

impl DayBand {
    /// Band containing `phase` (assumed in `[0, 1)`).
    pub fn from_phase(phase: f32) -> Self {
        if phase < SUNRISE_START {
            DayBand::Night
        } else if phase < DAY_START {
            DayBand::Sunrise
        } else if phase < SUNSET_START {
            DayBand::Daytime
        } else if phase < DUSK_START {
            DayBand::Sunset
        } else {
            DayBand::Dusk
        }
    }

    /// Phase interval `[start, end)` covered by this band.
    pub fn bounds(self) -> (f32, f32) {
        match self {
            DayBand::Night => (0.0, SUNRISE_START),
            DayBand::Sunrise => (SUNRISE_START, DAY_START),
            DayBand::Daytime => (DAY_START, SUNSET_START),
            DayBand::Sunset => (SUNSET_START, DUSK_START),
            DayBand::Dusk => (DUSK_START, 1.0),
        }
    }

    /// Normalized progress `[0, 1)` of `phase` through this band.
    pub fn progress(self, phase: f32) -> f32 {
        let (start, end) = self.bounds();
        ((phase - start) / (end - start)).clamp(0.0, 1.0)
    }
}

/// Tracks the current phase within a day plus elapsed day count.
///
/// The phase is accumulated in `f64` so long sessions do not drift.
#[derive(Clone, Debug)]
pub struct TimeOfDay {
    /// Current phase, in the range `[0.0, 1.0)`.
    phase: f64,
    /// Number of full days that have elapsed.
    day_count: u32,
}

impl TimeOfDay {
    /// Create a new time starting at the given phase (wrapped into `[0, 1)`).
    pub fn new(start_phase: f32) -> Self {
        let mut time = Self { phase: 0.0, day_count: 0 };
        time.set(start_phase);
        time
    }

    /// Advance by `dt_seconds`, where `day_length_seconds` real seconds make one day.
    pub fn advance(&mut self, dt_seconds: f32, day_length_seconds: f32) {
        if day_length_seconds <= 0.0 || !dt_seconds.is_finite() {
            return;
        }
        self.phase += dt_seconds as f64 / day_length_seconds as f64;

        // Handle wrapping
        while self.phase >= 1.0 {
            self.phase -= 1.0;
            self.day_count += 1;
        }
        while self.phase < 0.0 {
            self.phase += 1.0;
            self.day_count = self.day_count.saturating_sub(1);
        }
    }

    /// Set the phase directly, wrapping into `[0, 1)`.
    pub fn set(&mut self, phase: f32) {
        let wrapped = (phase as f64).rem_euclid(1.0);
        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        self.phase = if wrapped >= 1.0 { 0.0 } else { wrapped };
    }

    /// Current phase in the range `[0.0, 1.0)`.
    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase as f32
    }

    /// Number of full days that have passed.
    #[inline]
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Band containing the current phase.
    #[inline]
    pub fn band(&self) -> DayBand {
        DayBand::from_phase(self.phase())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_and_counts_days() {
        let mut time = TimeOfDay::new(0.9);
        time.advance(36.0, 180.0); // +0.2
        assert!((time.phase() - 0.1).abs() < 1e-5, "phase = {}", time.phase());
        assert_eq!(time.day_count(), 1);
    }

    #[test]
    fn test_n_ticks_match_closed_form() {
        let mut time = TimeOfDay::new(0.0);
        let dt = 1.0 / 60.0;
        let day_length = 180.0;
        let ticks = 25_000u32;
        for _ in 0..ticks {
            time.advance(dt, day_length);
        }
        let expected = ((ticks as f64 * dt as f64) / day_length as f64).rem_euclid(1.0) as f32;
        assert!((time.phase() - expected).abs() < 1e-4, "phase {} vs expected {}", time.phase(), expected);
        assert_eq!(time.day_count(), 2);
    }

    #[test]
    fn test_zero_day_length_pauses() {
        let mut time = TimeOfDay::new(0.4);
        time.advance(10.0, 0.0);
        assert!((time.phase() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_set_wraps() {
        let mut time = TimeOfDay::new(0.0);
        time.set(1.25);
        assert!((time.phase() - 0.25).abs() < 1e-6);
        time.set(-0.25);
        assert!((time.phase() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_bands() {
        assert_eq!(DayBand::from_phase(0.0), DayBand::Night);
        assert_eq!(DayBand::from_phase(0.2), DayBand::Sunrise);
        assert_eq!(DayBand::from_phase(0.5), DayBand::Daytime);
        assert_eq!(DayBand::from_phase(0.75), DayBand::Sunset);
        assert_eq!(DayBand::from_phase(0.99), DayBand::Dusk);
        assert!((DayBand::Sunrise.progress(0.25) - 0.5).abs() < 1e-5);
    }
}

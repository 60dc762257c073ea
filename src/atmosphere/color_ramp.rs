//! Keyframe interpolation over the normalized day phase.
//!
//! [`ColorRamp`] interpolates between `(phase, value)` keys over a `[0, 1)`
//! cycle with wrapping past the end of the day. Used for sky gradient colors,
//! sun color, and the day/night weights behind light, star and audio fades.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Lerp trait
// ---------------------------------------------------------------------------

/// Trait for types that can be linearly interpolated.
pub trait Lerp: Clone {
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for [f32; 3] {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        [
            self[0] + (other[0] - self[0]) * t,
            self[1] + (other[1] - self[1]) * t,
            self[2] + (other[2] - self[2]) * t,
        ]
    }
}

// ---------------------------------------------------------------------------
// ColorRamp
// ---------------------------------------------------------------------------

/// Keyframe-based value ramp over one wrapping day.
///
/// Keys are `(phase, value)` pairs sorted by phase. Between the last key and
/// the first, interpolation wraps through the end of the day (1.0 == 0.0).
#[derive(Clone, Debug)]
pub struct ColorRamp<T: Lerp> {
    keys: Vec<(f32, T)>,
}

impl<T: Lerp> ColorRamp<T> {
    /// Create a new ramp from unsorted keys. Phases are wrapped into `[0, 1)`.
    pub fn new(keys: Vec<(f32, T)>) -> Self {
        let mut keys: Vec<(f32, T)> = keys
            .into_iter()
            .map(|(p, v)| (p.rem_euclid(1.0), v))
            .collect();
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keys }
    }

    /// Create a constant ramp that always returns the same value.
    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![(0.0, value)],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Sample at `phase` (wrapped into `[0, 1)`). An empty ramp yields `None`.
    pub fn sample(&self, phase: f32) -> Option<T> {
        let n = self.keys.len();
        match n {
            0 => return None,
            1 => return Some(self.keys[0].1.clone()),
            _ => {}
        }

        let t = phase.rem_euclid(1.0);
        let upper = self.keys.partition_point(|k| k.0 <= t);

        // Bracketing keys; indices 0 and n both mean the span wraps past 1.0
        let (lo, hi, lo_phase, hi_phase) = if upper == 0 || upper == n {
            let (a, b) = (n - 1, 0);
            (a, b, self.keys[a].0, self.keys[b].0 + 1.0)
        } else {
            (upper - 1, upper, self.keys[upper - 1].0, self.keys[upper].0)
        };

        let (v_a, v_b) = (&self.keys[lo].1, &self.keys[hi].1);
        let span = hi_phase - lo_phase;
        if span < 1e-6 {
            return Some(v_a.clone());
        }
        // Unwrap t into the span when it sits before the first key
        let t = if t < lo_phase { t + 1.0 } else { t };
        Some(v_a.lerp(v_b, ((t - lo_phase) / span).clamp(0.0, 1.0)))
    }

    /// Sample, falling back to `default` for an empty ramp.
    #[inline]
    pub fn sample_or(&self, phase: f32, default: T) -> T {
        self.sample(phase).unwrap_or(default)
    }
}

// ---------------------------------------------------------------------------
// Serde support
// ---------------------------------------------------------------------------

impl<T: Lerp + Serialize> Serialize for ColorRamp<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.keys.serialize(serializer)
    }
}

impl<'de, T: Lerp + Deserialize<'de>> Deserialize<'de> for ColorRamp<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keys = Vec::<(f32, T)>::deserialize(deserializer)?;
        Ok(Self::new(keys))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

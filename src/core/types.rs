//! Core type aliases, re-exports and sampling ranges

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use glam::{
    Vec2, Vec3, Vec4,
    Mat3, Mat4,
    Quat,
};

/// Standard Result type for the simulation
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;

/// Half-open float range `[min, max)` sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw a value. A degenerate range always yields `min`.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    /// Whether `value` lies within the closed interval `[min, max]`.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Inclusive integer range `[min, max]` sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.max > self.min {
            rng.gen_range(self.min..=self.max)
        } else {
            self.min
        }
    }

    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Draw a uniform value in `[min, max)`; used by the shape builders for fixed ranges.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    FloatRange::new(min, max).sample(rng)
}

/// Draw a uniform value in `[-half_width, half_width)`.
#[inline]
pub fn spread<R: Rng + ?Sized>(rng: &mut R, half_width: f32) -> f32 {
    uniform(rng, -half_width, half_width)
}

/// Draw an integer in `[min, max]`.
#[inline]
pub fn count<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    CountRange::new(min, max).sample(rng)
}

/// Bernoulli trial with probability `p`.
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    rng.r#gen::<f32>() < p
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_float_range_samples_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = FloatRange::new(0.4, 2.0);
        for _ in 0..1000 {
            let v = range.sample(&mut rng);
            assert!(v >= 0.4 && v < 2.0, "sample {} escaped [0.4, 2.0)", v);
        }
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(FloatRange::new(3.0, 3.0).sample(&mut rng), 3.0);
        assert_eq!(CountRange::new(5, 5).sample(&mut rng), 5);
        assert!(!FloatRange::new(2.0, 1.0).is_valid());
        assert!(!CountRange::new(9, 8).is_valid());
    }

    #[test]
    fn test_count_range_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(3);
        let range = CountRange::new(2, 4);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let v = range.sample(&mut rng);
            assert!(range.contains(v), "count {} outside [2, 4]", v);
            seen[(v - 2) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every value in [2, 4] should appear: {:?}", seen);
    }
}

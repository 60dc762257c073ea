//! Short-lived ring left where a rain drop hits the ground.

use rand::Rng;

use crate::core::types::{Vec3, uniform};
use crate::generation::{Rgb, palette};

#[derive(Clone, Debug)]
pub struct RainSplash {
    pub position: Vec3,
    pub radius: f32,
    pub color: Rgb,
    born: f64,
    duration: f32,
}

impl RainSplash {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, position: Vec3, now: f64) -> Self {
        Self {
            position,
            radius: uniform(rng, 0.05, 0.1),
            color: Rgb::from_hex(palette::RAIN),
            born: now,
            duration: uniform(rng, 0.3, 0.5),
        }
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Fraction of the lifetime elapsed, clamped to `[0, 1]`.
    pub fn progress(&self, now: f64) -> f32 {
        (((now - self.born) / self.duration as f64) as f32).clamp(0.0, 1.0)
    }

    /// Ring scale in the ground plane.
    pub fn scale(&self, now: f64) -> f32 {
        1.0 + 2.0 * self.progress(now)
    }

    pub fn opacity(&self, now: f64) -> f32 {
        0.7 * (1.0 - self.progress(now))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_splash_grows_and_fades() {
        let mut rng = StdRng::seed_from_u64(141);
        let splash = RainSplash::new(&mut rng, Vec3::new(1.0, 0.05, 2.0), 10.0);
        assert!((0.05..0.1).contains(&splash.radius));
        assert!((0.3..0.5).contains(&splash.duration()));

        assert!((splash.opacity(10.0) - 0.7).abs() < 1e-6);
        assert!((splash.scale(10.0) - 1.0).abs() < 1e-6);

        let mid = 10.0 + splash.duration() as f64 / 2.0;
        assert!((splash.scale(mid) - 2.0).abs() < 1e-4);
        assert!((splash.opacity(mid) - 0.35).abs() < 1e-4);

        assert!(!splash.is_finished(mid));
        assert!(splash.is_finished(10.5));
        assert_eq!(splash.opacity(11.0), 0.0);
    }
}

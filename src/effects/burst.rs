//! Sparkle burst played when a plant is revived.

use std::f32::consts::TAU;

use rand::Rng;

use crate::core::types::{Vec3, spread, uniform};
use crate::generation::{Rgb, palette};

pub const BURST_PARTICLES: usize = 50;
pub const BURST_DURATION: f32 = 2.0;
const BURST_RADIUS: f32 = 0.5;
const BURST_HEIGHT: f32 = 2.0;
const RISE_PER_TICK: f32 = 0.03;
const JITTER: f32 = 0.01;

#[derive(Clone, Copy, Debug)]
pub struct BurstParticle {
    pub position: Vec3,
    pub size: f32,
    pub color: Rgb,
}

#[derive(Clone, Debug)]
pub struct RevivalBurst {
    pub origin: Vec3,
    particles: Vec<BurstParticle>,
    born: f64,
}

impl RevivalBurst {
    /// Scatter particles on a small sphere around `origin`, raised up to two
    /// units.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, origin: Vec3, now: f64) -> Self {
        let particles = (0..BURST_PARTICLES)
            .map(|_| {
                let theta = uniform(rng, 0.0, TAU);
                let phi = (2.0 * rng.r#gen::<f32>() - 1.0).acos();
                let position = Vec3::new(
                    origin.x + BURST_RADIUS * phi.sin() * theta.cos(),
                    origin.y + uniform(rng, 0.0, BURST_HEIGHT),
                    origin.z + BURST_RADIUS * phi.sin() * theta.sin(),
                );
                BurstParticle {
                    position,
                    size: uniform(rng, 0.1, 0.3),
                    color: palette::tint(rng, [0.5, 0.8, 0.1], [0.5, 0.2, 0.3]),
                }
            })
            .collect();
        Self { origin, particles, born: now }
    }

    #[inline]
    pub fn particles(&self) -> &[BurstParticle] {
        &self.particles
    }

    /// Float every particle upward with a little horizontal jitter.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for p in &mut self.particles {
            p.position.y += RISE_PER_TICK;
            p.position.x += spread(rng, JITTER);
            p.position.z += spread(rng, JITTER);
        }
    }

    pub fn progress(&self, now: f64) -> f32 {
        (((now - self.born) / BURST_DURATION as f64) as f32).clamp(0.0, 1.0)
    }

    pub fn opacity(&self, now: f64) -> f32 {
        1.0 - self.progress(now)
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
    fn test_burst_layout() {
        let mut rng = StdRng::seed_from_u64(151);
        let origin = Vec3::new(3.0, 0.0, -4.0);
        let burst = RevivalBurst::new(&mut rng, origin, 0.0);
        assert_eq!(burst.particles().len(), BURST_PARTICLES);
        for p in burst.particles() {
            let horizontal = ((p.position.x - origin.x).powi(2) + (p.position.z - origin.z).powi(2)).sqrt();
            assert!(horizontal <= BURST_RADIUS + 1e-5, "horizontal offset {}", horizontal);
            assert!((0.0..=BURST_HEIGHT).contains(&p.position.y));
            assert!((0.1..0.3).contains(&p.size));
            let [r, g, b] = p.color.0;
            assert!((0.5..=1.0).contains(&r) && (0.8..=1.0).contains(&g) && (0.1..=0.4).contains(&b));
        }
    }

    #[test]
    fn test_burst_rises_and_fades() {
        let mut rng = StdRng::seed_from_u64(152);
        let mut burst = RevivalBurst::new(&mut rng, Vec3::ZERO, 1.0);
        let before: Vec<f32> = burst.particles().iter().map(|p| p.position.y).collect();
        burst.step(&mut rng);
        for (p, y) in burst.particles().iter().zip(before) {
            assert!((p.position.y - y - RISE_PER_TICK).abs() < 1e-6);
        }
        assert!((burst.opacity(2.0) - 0.5).abs() < 1e-6);
        assert!(!burst.is_finished(2.9));
        assert!(burst.is_finished(3.0));
    }
}

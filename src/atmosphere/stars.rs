//! Star field placement.

use rand::Rng;
use serde::Serialize;
use std::f32::consts::TAU;

use glam::Vec3;

/// Fixed star positions on a sphere around the scene. Opacity is driven by
/// the sky state; positions never change after generation.
#[derive(Clone, Debug, Serialize)]
pub struct StarField {
    pub radius: f32,
    pub positions: Vec<Vec3>,
}

impl StarField {
    /// Scatter `count` stars uniformly over a sphere of `radius`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: u32, radius: f32) -> Self {
        let positions = (0..count)
            .map(|_| {
                let theta = rng.gen_range(0.0..TAU);
                let cos_phi: f32 = rng.gen_range(-1.0..1.0);
                let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
                Vec3::new(
                    radius * sin_phi * theta.cos(),
                    radius * cos_phi,
                    radius * sin_phi * theta.sin(),
                )
            })
            .collect();
        Self { radius, positions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_stars_lie_on_sphere() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = StarField::generate(&mut rng, 2000, 350.0);
        assert_eq!(field.len(), 2000);
        for p in &field.positions {
            assert!((p.length() - 350.0).abs() < 0.05, "star at distance {}", p.length());
        }
    }

    #[test]
    fn test_stars_cover_both_hemispheres() {
        let mut rng = StdRng::seed_from_u64(12);
        let field = StarField::generate(&mut rng, 500, 350.0);
        let above = field.positions.iter().filter(|p| p.y > 0.0).count();
        assert!(above > 150 && above < 350, "expected roughly half above the horizon, got {}", above);
    }
}

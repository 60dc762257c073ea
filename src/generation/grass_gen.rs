//! Grass tufts: fans of thin double-sided blades.

use std::f32::consts::{FRAC_PI_2, TAU};

use rand::Rng;

use super::palette;
use super::shape::{Primitive, ShapeNode};
use crate::core::types::{chance, count, spread, uniform};

/// Probability that a tuft is made of tall grass.
const TALL_GRASS_CHANCE: f32 = 0.3;

/// Build a tuft of 8-16 blades fanned around the origin.
pub fn grass_tuft<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let blades = count(rng, 8, 16);
    let tall = chance(rng, TALL_GRASS_CHANCE);
    let mut tuft = ShapeNode::group();

    for i in 0..blades {
        let height = if tall { uniform(rng, 0.7, 1.3) } else { uniform(rng, 0.4, 0.8) };
        let width = uniform(rng, 0.05, 0.08);
        let angle = i as f32 / blades as f32 * TAU + uniform(rng, 0.0, 0.7);
        let radius = uniform(rng, 0.0, 0.15);

        tuft.push(
            ShapeNode::mesh(Primitive::Plane { width, height }, palette::pick(rng, &palette::GRASS))
                .at(angle.cos() * radius, height / 2.0, angle.sin() * radius)
                .rotated(-FRAC_PI_2 + spread(rng, 0.2), angle, spread(rng, 0.15))
                .double_sided(),
        );
    }
    tuft
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_blade_count_and_palette() {
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..100 {
            let tuft = grass_tuft(&mut rng);
            assert!((8..=16).contains(&tuft.children.len()), "blades: {}", tuft.children.len());
            for blade in &tuft.children {
                assert!(blade.double_sided, "blades are visible from both sides");
                assert!(palette::GRASS.contains(&blade.color.to_hex()));
            }
        }
    }

    #[test]
    fn test_blade_heights_consistent_within_tuft() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let tuft = grass_tuft(&mut rng);
            let heights: Vec<f32> = tuft
                .children
                .iter()
                .filter_map(|b| match b.primitive {
                    Some(Primitive::Plane { height, .. }) => Some(height),
                    _ => None,
                })
                .collect();
            let all_tall = heights.iter().all(|h| (0.7..1.3).contains(h));
            let all_short = heights.iter().all(|h| (0.4..0.8).contains(h));
            assert!(all_tall || all_short, "a tuft is uniformly tall or normal: {:?}", heights);
        }
    }
}

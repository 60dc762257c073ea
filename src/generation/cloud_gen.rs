//! Cloud puff clusters and the rain-drop mesh hung beneath them.

use rand::Rng;

use super::palette::{CLOUD, RAIN};
use super::shape::{Primitive, Rgb, ShapeNode};
use crate::core::types::{Vec3, count, spread, uniform};

/// Opacity of a fresh cloud puff.
pub const PUFF_OPACITY: f32 = 0.9;

/// 5-8 white spheres jittered around the cloud centre.
pub fn cloud<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let mut cloud = ShapeNode::group();
    for _ in 0..count(rng, 5, 8) {
        let radius = uniform(rng, 0.5, 1.2);
        let (x, y, z) = (spread(rng, 1.0), spread(rng, 0.5), spread(rng, 1.0));
        cloud.push(
            ShapeNode::mesh(Primitive::Sphere { radius }, Rgb::from_hex(CLOUD))
                .with_opacity(PUFF_OPACITY)
                .at(x, y, z),
        );
    }
    cloud
}

/// Thin blue box used for every rain drop.
pub fn rain_drop() -> ShapeNode {
    ShapeNode::mesh(
        Primitive::Cuboid {
            size: Vec3::new(0.05, 0.2, 0.05),
        },
        Rgb::from_hex(RAIN),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_cloud_puffs() {
        let mut rng = StdRng::seed_from_u64(111);
        for _ in 0..100 {
            let cloud = cloud(&mut rng);
            assert!((5..=8).contains(&cloud.children.len()), "puffs {}", cloud.children.len());
            for puff in &cloud.children {
                assert!((puff.opacity - PUFF_OPACITY).abs() < 1e-6);
                assert!(puff.translation.x.abs() <= 1.0 && puff.translation.y.abs() <= 0.5);
                let Some(Primitive::Sphere { radius }) = puff.primitive else {
                    panic!("puffs are spheres");
                };
                assert!((0.5..1.2).contains(&radius), "puff radius {}", radius);
            }
        }
    }
}

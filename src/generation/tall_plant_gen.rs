//! Tall plants: a slender trunk with blade leaves. The wilted form bends over
//! and droops; the revived one stands straight under a leafy crown.

use std::f32::consts::{PI, TAU};

use rand::Rng;

use super::palette::{self, BARK, WILTED_LEAF};
use super::shape::{LeafOutline, Primitive, Rgb, ShapeNode};
use crate::core::types::{count, uniform};

fn trunk(thickness: f32, flare: f32, height: f32) -> ShapeNode {
    ShapeNode::mesh(
        Primitive::Cylinder {
            radius_top: thickness,
            radius_bottom: thickness * flare,
            height,
            open_ended: false,
        },
        Rgb::from_hex(BARK),
    )
    .at(0.0, height / 2.0, 0.0)
}

/// Leaf placed at the trunk surface, fanned around it.
#[allow(clippy::too_many_arguments)]
fn trunk_leaf<R: Rng + ?Sized>(
    rng: &mut R,
    outline: LeafOutline,
    size: (f32, f32),
    color: Rgb,
    trunk_height: f32,
    thickness: f32,
    height_fraction: f32,
    angle: f32,
) -> ShapeNode {
    let height = trunk_height * height_fraction;
    let ratio = height / trunk_height;
    let surface = thickness * (1.0 - ratio) + thickness * 1.3 * ratio;
    let curve = if height > trunk_height / 2.0 { (height - trunk_height / 2.0) * 0.2 } else { 0.0 };

    ShapeNode::mesh(
        Primitive::Leaf {
            outline,
            width: size.0,
            length: size.1,
        },
        color,
    )
    .double_sided()
    .at(angle.cos() * surface + curve, height, angle.sin() * surface)
    .rotated(PI * 0.4, uniform(rng, -PI * 0.15, PI * 0.15), angle)
}

/// Bent grey stalk with limp leaves.
pub fn wilted_tall_plant<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let height = uniform(rng, 2.0, 5.0);
    let thickness = uniform(rng, 0.1, 0.3);
    let mut plant = ShapeNode::group();

    let segment_height = height / 3.0;
    for i in 1..3 {
        let i = i as f32;
        plant.push(
            ShapeNode::mesh(
                Primitive::Cylinder {
                    radius_top: thickness - i * 0.02,
                    radius_bottom: thickness - (i - 1.0) * 0.02,
                    height: segment_height,
                    open_ended: false,
                },
                Rgb::from_hex(BARK),
            )
            .at(i * 0.2, height / 2.0 + i * segment_height * 0.5, 0.0)
            .rotated(0.0, 0.0, -i * 0.1),
        );
    }
    plant.push(trunk(thickness, 1.3, height));

    let leaves = count(rng, 4, 8);
    for i in 0..leaves {
        let size = (uniform(rng, 0.3, 0.5), uniform(rng, 0.6, 1.0));
        let t = i as f32 / leaves as f32;
        let leaf = trunk_leaf(
            rng,
            LeafOutline::Limp,
            size,
            Rgb::from_hex(WILTED_LEAF),
            height,
            thickness,
            0.5 + t * 0.5,
            t * TAU,
        );
        plant.push(leaf);
    }
    plant
}

/// Straight trunk, green blades up its length and a stretched sphere crown.
pub fn revived_tall_plant<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let height = uniform(rng, 2.5, 5.5);
    let thickness = uniform(rng, 0.1, 0.3);
    let mut plant = ShapeNode::group().with_child(trunk(thickness, 1.4, height));

    let leaves = count(rng, 6, 11);
    for i in 0..leaves {
        let size = (uniform(rng, 0.3, 0.5), uniform(rng, 0.8, 1.2));
        let color = palette::pick(rng, &palette::REVIVED_TALL_LEAVES);
        let t = i as f32 / leaves as f32;
        let leaf = trunk_leaf(rng, LeafOutline::Blade, size, color, height, thickness, 0.4 + t * 0.6, t * TAU);
        plant.push(leaf);
    }

    let canopy_width = uniform(rng, 0.6, 1.4);
    let canopy_height = uniform(rng, 0.8, 2.0);
    plant.push(
        ShapeNode::mesh(
            Primitive::Sphere { radius: canopy_width },
            palette::pick(rng, &palette::REVIVED_TALL_LEAVES),
        )
        .at(0.0, height + 0.3, 0.0)
        .scaled(1.0, canopy_height / canopy_width, 1.0),
    );
    plant
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn leaves(shape: &ShapeNode) -> Vec<&ShapeNode> {
        shape
            .children
            .iter()
            .filter(|n| matches!(n.primitive, Some(Primitive::Leaf { .. })))
            .collect()
    }

    #[test]
    fn test_wilted_tall_plant_shape() {
        let mut rng = StdRng::seed_from_u64(91);
        for _ in 0..30 {
            let plant = wilted_tall_plant(&mut rng);
            let leaves = leaves(&plant);
            assert!((4..=8).contains(&leaves.len()), "leaves {}", leaves.len());
            assert!(leaves.iter().all(|l| l.color.to_hex() == WILTED_LEAF), "limp leaves are dim grey");
            assert_eq!(plant.children.len() - leaves.len(), 3, "trunk plus two bent segments");
        }
    }

    #[test]
    fn test_revived_tall_plant_crown_sits_on_trunk() {
        let mut rng = StdRng::seed_from_u64(92);
        for _ in 0..30 {
            let plant = revived_tall_plant(&mut rng);
            let Some(Primitive::Cylinder { height, .. }) = plant.children[0].primitive else {
                panic!("first child is the trunk");
            };
            assert!((2.5..=5.5).contains(&height), "trunk height {}", height);

            let crown = plant.children.last().expect("crown");
            assert!((crown.translation.y - (height + 0.3)).abs() < 1e-5);
            let leaves = leaves(&plant);
            assert!((6..=11).contains(&leaves.len()), "leaves {}", leaves.len());
            for leaf in leaves {
                assert!(leaf.translation.y >= height * 0.4 - 1e-4, "leaf below the upper trunk");
            }
        }
    }
}

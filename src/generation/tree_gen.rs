//! Decorative perimeter trees.

use rand::Rng;

use super::palette::{self, BARK};
use super::shape::{Primitive, Rgb, ShapeNode};
use crate::core::types::{count, uniform};

/// Build a tree: a tapered trunk topped by 2-3 stacked, shrinking canopy spheres.
pub fn decorative_tree<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let trunk_height = uniform(rng, 4.0, 6.0);
    let mut tree = ShapeNode::group().with_child(
        ShapeNode::mesh(
            Primitive::Cylinder {
                radius_top: 0.4,
                radius_bottom: 0.6,
                height: trunk_height,
                open_ended: false,
            },
            Rgb::from_hex(BARK),
        )
        .at(0.0, trunk_height / 2.0, 0.0),
    );

    let layers = count(rng, 2, 3);
    for i in 0..layers {
        let i = i as f32;
        tree.push(
            ShapeNode::mesh(
                Primitive::Sphere { radius: 2.0 - i * 0.3 },
                palette::pick(rng, &palette::TREE_CANOPY),
            )
            .at(0.0, trunk_height - 1.0 + i * 1.5, 0.0),
        );
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_tree_structure() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let tree = decorative_tree(&mut rng);
            let meshes = tree.mesh_count();
            assert!((3..=4).contains(&meshes), "trunk + 2-3 canopies, got {}", meshes);

            let Some(Primitive::Cylinder { height, .. }) = tree.children[0].primitive else {
                panic!("first child should be the trunk");
            };
            assert!((4.0..6.0).contains(&height), "trunk height {}", height);

            for canopy in &tree.children[1..] {
                assert!(palette::TREE_CANOPY.contains(&canopy.color.to_hex()));
            }
        }
    }

    #[test]
    fn test_canopies_shrink_upward() {
        let mut rng = StdRng::seed_from_u64(22);
        let tree = decorative_tree(&mut rng);
        let radii: Vec<f32> = tree.children[1..]
            .iter()
            .filter_map(|c| match c.primitive {
                Some(Primitive::Sphere { radius }) => Some(radius),
                _ => None,
            })
            .collect();
        assert!(radii.windows(2).all(|w| w[1] < w[0]), "radii {:?}", radii);
    }
}

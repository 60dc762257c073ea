//! Small groups of plants sharing one placement: the mixed wild cluster and
//! the wilted cluster plant kind.

use std::f32::consts::TAU;

use rand::Rng;

use super::shape::ShapeNode;
use super::{bush_gen, flower_gen, grass_gen, ivy_gen, mushroom_gen, tall_plant_gen};
use crate::core::types::{count, uniform};

/// Place `members` built by `build` on a tight ring around the cluster origin.
fn scatter<R: Rng + ?Sized>(
    rng: &mut R,
    members: u32,
    radius: (f32, f32),
    scale: (f32, f32),
    build: impl Fn(&mut R) -> ShapeNode,
) -> ShapeNode {
    let mut cluster = ShapeNode::group();
    for _ in 0..members {
        let plant = build(rng);
        let r = uniform(rng, radius.0, radius.1);
        let angle = uniform(rng, 0.0, TAU);
        let s = uniform(rng, scale.0, scale.1);
        let yaw = uniform(rng, 0.0, TAU);
        cluster.push(plant.at(angle.cos() * r, 0.0, angle.sin() * r).uniform_scale(s).rotated(0.0, yaw, 0.0));
    }
    cluster
}

/// 2-5 wildflowers, grass tufts, mushrooms or ivy patches.
pub fn mixed_cluster<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let members = count(rng, 2, 5);
    scatter(rng, members, (0.2, 0.7), (0.5, 1.2), |rng| match rng.r#gen::<f32>() {
        r if r < 0.3 => flower_gen::wildflower(rng),
        r if r < 0.6 => grass_gen::grass_tuft(rng),
        r if r < 0.85 => mushroom_gen::mushroom(rng),
        _ => ivy_gen::small_ivy(rng),
    })
}

/// 2-4 wilted flowers, bushes, tall plants or ivy.
pub fn wilted_cluster<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let members = count(rng, 2, 4);
    scatter(rng, members, (0.3, 0.9), (0.6, 1.2), |rng| match rng.r#gen::<f32>() {
        r if r < 0.4 => flower_gen::wilted_flower(rng),
        r if r < 0.7 => bush_gen::wilted_bush(rng),
        r if r < 0.9 => tall_plant_gen::wilted_tall_plant(rng),
        _ => ivy_gen::wilted_ivy(rng),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_mixed_cluster_layout() {
        let mut rng = StdRng::seed_from_u64(101);
        for _ in 0..50 {
            let cluster = mixed_cluster(&mut rng);
            assert!((2..=5).contains(&cluster.children.len()), "members {}", cluster.children.len());
            for member in &cluster.children {
                let d = member.translation.length();
                assert!((0.2..=0.7).contains(&d), "member distance {}", d);
                assert!((0.5..=1.2).contains(&member.scale.x), "member scale {}", member.scale.x);
                assert_eq!(member.translation.y, 0.0, "members stand on the ground");
            }
        }
    }

    #[test]
    fn test_wilted_cluster_layout() {
        let mut rng = StdRng::seed_from_u64(102);
        for _ in 0..50 {
            let cluster = wilted_cluster(&mut rng);
            assert!((2..=4).contains(&cluster.children.len()), "members {}", cluster.children.len());
            for member in &cluster.children {
                let d = member.translation.length();
                assert!((0.3..=0.9).contains(&d), "member distance {}", d);
                assert!(member.mesh_count() > 0, "every member has geometry");
            }
        }
    }
}

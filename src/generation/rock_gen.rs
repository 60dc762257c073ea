//! Scattered rocks: jittered dodecahedra.

use rand::Rng;

use super::palette;
use super::shape::{Primitive, ShapeNode};
use crate::core::types::{spread, Vec3};

/// A dodecahedron has 20 vertices.
pub const ROCK_VERTEX_COUNT: usize = 20;

/// Largest per-axis vertex displacement.
pub const ROCK_JITTER: f32 = 0.1;

/// Build a rock of base radius 0.5 with every vertex displaced by up to
/// [`ROCK_JITTER`], resting slightly sunk into the ground.
pub fn rock<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let jitter = (0..ROCK_VERTEX_COUNT)
        .map(|_| {
            Vec3::new(
                spread(rng, ROCK_JITTER),
                spread(rng, ROCK_JITTER),
                spread(rng, ROCK_JITTER),
            )
        })
        .collect();

    ShapeNode::mesh(
        Primitive::Rock { radius: 0.5, jitter },
        palette::pick(rng, &palette::ROCKS),
    )
    .at(0.0, 0.15, 0.0)
}

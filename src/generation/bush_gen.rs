//! Bushes: decorative shrubs and the wilted/revived bush plant kind.

use std::f32::consts::TAU;

use rand::Rng;

use super::palette::{self, BARK, OLIVE_DRAB, WILTED_CLUSTER};
use super::shape::{Primitive, Rgb, ShapeNode};
use crate::core::types::{chance, count, spread, uniform};

fn trunk_base(radius: f32, flare: f32, height: f32, color: Rgb) -> ShapeNode {
    ShapeNode::mesh(
        Primitive::Cylinder {
            radius_top: radius,
            radius_bottom: radius * flare,
            height,
            open_ended: false,
        },
        color,
    )
    .at(0.0, height / 2.0, 0.0)
}

/// Decorative shrub: a short stump under 3-5 leafy spheres, each with up to
/// two smaller sub-clusters, and a 20% chance of 2-4 flowers on top.
pub fn decorative_bush<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let mut bush = ShapeNode::group().with_child(trunk_base(0.3, 4.0 / 3.0, 0.5, Rgb::from_hex(BARK)));

    let clusters = count(rng, 3, 5);
    for i in 0..clusters {
        let color = palette::pick(rng, &palette::BUSH_LEAVES);
        let radius = uniform(rng, 0.3, 0.5);
        let angle = i as f32 / clusters as f32 * TAU;
        let (x, y, z) = (angle.cos() * radius, uniform(rng, 0.6, 1.0), angle.sin() * radius);
        bush.push(ShapeNode::mesh(Primitive::Sphere { radius: uniform(rng, 0.6, 1.0) }, color).at(x, y, z));

        for _ in 0..count(rng, 0, 2) {
            let sub_angle = uniform(rng, 0.0, TAU);
            bush.push(
                ShapeNode::mesh(Primitive::Sphere { radius: uniform(rng, 0.3, 0.5) }, color).at(
                    x + sub_angle.cos() * 0.3,
                    y + uniform(rng, 0.2, 0.5),
                    z + sub_angle.sin() * 0.3,
                ),
            );
        }
    }

    if chance(rng, 0.2) {
        for _ in 0..count(rng, 2, 4) {
            let angle = uniform(rng, 0.0, TAU);
            bush.push(
                ShapeNode::mesh(
                    Primitive::Dodecahedron { radius: uniform(rng, 0.1, 0.2) },
                    palette::pick(rng, &palette::BUSH_FLOWERS),
                )
                .at(angle.cos() * 0.5, uniform(rng, 1.0, 1.5), angle.sin() * 0.5),
            );
        }
    }
    bush
}

/// Wilted bush: an olive stump under 4-8 squashed grey clusters.
pub fn wilted_bush<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let base_radius = uniform(rng, 0.15, 0.4);
    let base_height = uniform(rng, 0.3, 0.7);
    let mut bush = ShapeNode::group().with_child(trunk_base(base_radius, 1.5, base_height, Rgb::from_hex(OLIVE_DRAB)));

    let clusters = count(rng, 4, 8);
    for i in 0..clusters {
        let angle = i as f32 / clusters as f32 * TAU;
        let radius = uniform(rng, 0.2, 0.7);
        bush.push(
            ShapeNode::mesh(
                Primitive::Icosahedron { radius: uniform(rng, 0.2, 0.6), detail: 0 },
                Rgb::from_hex(WILTED_CLUSTER),
            )
            .at(angle.cos() * radius, base_height + uniform(rng, 0.0, 0.5), angle.sin() * radius)
            .scaled(uniform(rng, 0.9, 1.1), uniform(rng, 0.7, 1.0), uniform(rng, 0.9, 1.1)),
        );
    }
    bush
}

/// Revived bush: 5-10 full leaf clusters (a third with a sub-cluster) and 1-6 flowers.
pub fn revived_bush<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let base_radius = uniform(rng, 0.15, 0.4);
    let base_height = uniform(rng, 0.3, 0.7);
    let mut bush = ShapeNode::group().with_child(trunk_base(base_radius, 1.3, base_height, Rgb::from_hex(BARK)));

    let clusters = count(rng, 5, 10);
    let width = uniform(rng, 0.6, 1.8);
    let height = uniform(rng, 0.8, 1.8);
    for i in 0..clusters {
        let size = uniform(rng, 0.25, 0.6);
        let color = palette::pick(rng, &palette::REVIVED_BUSH_LEAVES);
        let angle = i as f32 / clusters as f32 * TAU;
        let radius = width * uniform(rng, 0.3, 1.0);
        let y = base_height + uniform(rng, 0.0, height);
        bush.push(
            ShapeNode::mesh(Primitive::Icosahedron { radius: size, detail: 1 }, color)
                .at(angle.cos() * radius, y, angle.sin() * radius)
                .uniform_scale(uniform(rng, 0.8, 1.2)),
        );

        if chance(rng, 0.33) {
            let sub_angle = angle + spread(rng, 0.25);
            let sub_radius = radius * 0.8;
            bush.push(
                ShapeNode::mesh(Primitive::Icosahedron { radius: size * 0.8, detail: 1 }, color).at(
                    sub_angle.cos() * sub_radius,
                    y + spread(rng, 0.15),
                    sub_angle.sin() * sub_radius,
                ),
            );
        }
    }

    for _ in 0..count(rng, 1, 6) {
        let angle = uniform(rng, 0.0, TAU);
        let radius = width * 0.7 * rng.r#gen::<f32>();
        bush.push(
            ShapeNode::mesh(
                Primitive::Dodecahedron { radius: uniform(rng, 0.1, 0.22) },
                palette::pick(rng, &palette::REVIVED_BUSH_FLOWERS),
            )
            .at(
                angle.cos() * radius,
                base_height + height * 0.5 + uniform(rng, 0.0, height * 0.5),
                angle.sin() * radius,
            ),
        );
    }
    bush
}

//! Flowers: small decorative wildflowers plus the wilted and revived forms of
//! the flower plant kind.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use rand::Rng;

use super::palette;
use super::shape::{LeafOutline, Primitive, Rgb, ShapeNode};
use crate::core::types::{count, spread, uniform};

fn stem(radius_top: f32, radius_bottom: f32, height: f32, color: Rgb) -> ShapeNode {
    ShapeNode::mesh(
        Primitive::Cylinder {
            radius_top,
            radius_bottom,
            height,
            open_ended: false,
        },
        color,
    )
    .at(0.0, height / 2.0, 0.0)
}

fn petal(width: f32, length: f32, color: Rgb) -> ShapeNode {
    ShapeNode::mesh(
        Primitive::Leaf {
            outline: LeafOutline::Petal,
            width,
            length,
        },
        color,
    )
    .double_sided()
}

// ---------------------------------------------------------------------------
// Decorative
// ---------------------------------------------------------------------------

/// A short stem with one of three head shapes: ball, flattened daisy, or faceted.
pub fn wildflower<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let stem_height = uniform(rng, 0.5, 1.0);
    let color = palette::pick(rng, &palette::WILDFLOWER_HEADS);
    let head = match rng.gen_range(0..3) {
        0 => ShapeNode::mesh(Primitive::Sphere { radius: 0.15 }, color),
        1 => ShapeNode::mesh(Primitive::Sphere { radius: 0.2 }, color).scaled(1.0, 0.4, 1.0),
        _ => ShapeNode::mesh(Primitive::Dodecahedron { radius: 0.15 }, color),
    };

    ShapeNode::group()
        .with_child(stem(0.03, 0.05, stem_height, Rgb::from_hex(palette::WILDFLOWER_STEM)))
        .with_child(head.at(0.0, stem_height, 0.0))
}

// ---------------------------------------------------------------------------
// Wilted
// ---------------------------------------------------------------------------

/// Drooping head styles of a wilted flower.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WiltedHead {
    /// 60%: 4-8 limp petals
    Petals,
    /// 25%: a tilted centre disc ringed by 6-11 petals
    Daisy,
    /// 15%: an upside-down open bell
    Bell,
}

impl WiltedHead {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.r#gen::<f32>() {
            r if r < 0.6 => WiltedHead::Petals,
            r if r < 0.85 => WiltedHead::Daisy,
            _ => WiltedHead::Bell,
        }
    }
}

/// A brown stem with a drooping, faded head.
pub fn wilted_flower<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let stem_height = uniform(rng, 0.8, 1.8);
    let stem_color = match rng.gen_range(0..3) {
        0 => palette::tint(rng, [0.3, 0.25, 0.1], [0.2, 0.15, 0.1]),
        1 => palette::tint(rng, [0.4, 0.3, 0.2], [0.2, 0.15, 0.1]),
        _ => palette::tint(rng, [0.2, 0.2, 0.1], [0.15, 0.15, 0.05]),
    };
    let mut flower = ShapeNode::group().with_child(stem(0.03, 0.05, stem_height, stem_color));

    match WiltedHead::roll(rng) {
        WiltedHead::Petals => {
            let petals = count(rng, 4, 8);
            for i in 0..petals {
                let length = uniform(rng, 0.2, 0.5);
                let width = uniform(rng, 0.1, 0.25);
                let color = palette::tint(rng, [0.3, 0.2, 0.1], [0.25, 0.2, 0.05]);
                let angle = i as f32 / petals as f32 * TAU;
                flower.push(
                    petal(width, length, color)
                        .at(0.0, stem_height, 0.0)
                        .rotated(FRAC_PI_2 + uniform(rng, 0.0, 0.5), angle, 0.0),
                );
            }
        }
        WiltedHead::Daisy => {
            let centre_radius = uniform(rng, 0.15, 0.25);
            let droop = FRAC_PI_2 + uniform(rng, 0.0, 0.8);
            let centre_color = palette::tint(rng, [0.4, 0.3, 0.1], [0.2, 0.1, 0.0]);
            flower.push(
                ShapeNode::mesh(Primitive::Disc { radius: centre_radius }, centre_color)
                    .at(0.0, stem_height, 0.0)
                    .rotated(droop, 0.0, uniform(rng, 0.0, TAU))
                    .double_sided(),
            );

            let petals = count(rng, 6, 11);
            for i in 0..petals {
                let length = uniform(rng, 0.2, 0.35);
                let width = uniform(rng, 0.08, 0.15);
                let color = palette::tint(rng, [0.4, 0.3, 0.1], [0.3, 0.2, 0.1]);
                let angle = i as f32 / petals as f32 * TAU;
                flower.push(
                    petal(width, length, color)
                        .at(
                            angle.cos() * centre_radius * 0.8,
                            stem_height,
                            angle.sin() * centre_radius * 0.8,
                        )
                        .rotated(droop + spread(rng, 0.2), spread(rng, 0.15), angle),
                );
            }
        }
        WiltedHead::Bell => {
            let radius = uniform(rng, 0.15, 0.25);
            let height = uniform(rng, 0.25, 0.4);
            let color = palette::tint(rng, [0.3, 0.2, 0.25], [0.2, 0.1, 0.1]);
            flower.push(
                ShapeNode::mesh(
                    Primitive::Cylinder {
                        radius_top: radius,
                        radius_bottom: radius * 0.7,
                        height,
                        open_ended: true,
                    },
                    color,
                )
                .at(0.0, stem_height, 0.0)
                .rotated(PI + uniform(rng, 0.0, 0.5), 0.0, 0.0)
                .double_sided(),
            );
        }
    }
    flower
}

// ---------------------------------------------------------------------------
// Revived
// ---------------------------------------------------------------------------

/// A tall green stem with 2-5 leaves and a bright head of one of four shapes.
pub fn revived_flower<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let stem_color = palette::pick(rng, &palette::REVIVED_STEMS);
    let stem_height = uniform(rng, 1.5, 3.0);
    let thickness = uniform(rng, 0.05, 0.15);
    let mut flower = ShapeNode::group().with_child(stem(thickness, thickness * 1.5, stem_height, stem_color));

    let leaves = count(rng, 2, 5);
    for i in 0..leaves {
        let size = uniform(rng, 0.15, 0.4);
        let frac = i as f32 / leaves as f32;
        let angle = frac * TAU;
        flower.push(
            ShapeNode::mesh(
                Primitive::Leaf {
                    outline: LeafOutline::Petal,
                    width: size * 1.5,
                    length: size * 2.0,
                },
                palette::pick(rng, &palette::REVIVED_LEAVES),
            )
            .at(angle.cos() * 0.3, 0.4 + frac * stem_height * 0.8, angle.sin() * 0.3)
            .rotated(FRAC_PI_2, spread(rng, 0.15), angle)
            .double_sided(),
        );
    }

    let color = palette::pick(rng, &palette::REVIVED_FLOWERS);
    let size = uniform(rng, 0.25, 0.65);
    let head = match rng.gen_range(0..4) {
        0 => ShapeNode::mesh(Primitive::Dodecahedron { radius: size }, color),
        1 => ShapeNode::mesh(Primitive::Icosahedron { radius: size, detail: 0 }, color),
        2 => ShapeNode::mesh(Primitive::Octahedron { radius: size }, color),
        _ => ShapeNode::mesh(Primitive::Sphere { radius: size * 1.2 }, color).scaled(1.0, 0.3, 1.0),
    };
    flower.push(head.at(0.0, stem_height + 0.1, 0.0));
    flower
}

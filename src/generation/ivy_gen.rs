//! Ivy: the low decorative patch plus the wilted and revived climbing vines.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, TAU};

use rand::Rng;

use super::palette::{self, BARK, DARK_BARK};
use super::shape::{LeafOutline, Primitive, Rgb, ShapeNode};
use crate::core::types::{chance, count, spread, uniform};

fn base(radius: f32, flare: f32, color: u32) -> ShapeNode {
    let height = 0.15;
    ShapeNode::mesh(
        Primitive::Cylinder {
            radius_top: radius,
            radius_bottom: radius * flare,
            height,
            open_ended: false,
        },
        Rgb::from_hex(color),
    )
    .at(0.0, height / 2.0, 0.0)
}

fn round_leaf(size: f32, color: Rgb) -> ShapeNode {
    ShapeNode::mesh(
        Primitive::Leaf {
            outline: LeafOutline::Round,
            width: size * 2.0,
            length: size * 2.0,
        },
        color,
    )
    .double_sided()
}

// ---------------------------------------------------------------------------
// Decorative
// ---------------------------------------------------------------------------

/// Ground-hugging ivy patch: stems splayed outward with leaves along them.
pub fn small_ivy<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let base_radius = uniform(rng, 0.15, 0.25);
    let mut ivy = ShapeNode::group().with_child(
        ShapeNode::mesh(
            Primitive::Cylinder {
                radius_top: base_radius,
                radius_bottom: base_radius * 1.2,
                height: 0.1,
                open_ended: false,
            },
            Rgb::from_hex(BARK),
        )
        .at(0.0, 0.05, 0.0),
    );

    let stems = count(rng, 3, 6);
    for i in 0..stems {
        let length = uniform(rng, 0.6, 1.6);
        let color = palette::pick(rng, &palette::SMALL_IVY);
        let angle = i as f32 / stems as f32 * TAU + uniform(rng, 0.0, 0.3);
        let distance = uniform(rng, 0.1, 0.2);

        ivy.push(
            ShapeNode::mesh(
                Primitive::Cylinder {
                    radius_top: 0.02,
                    radius_bottom: 0.02,
                    height: length,
                    open_ended: true,
                },
                color,
            )
            .with_opacity(0.9)
            .at(angle.cos() * distance, length * 0.25, angle.sin() * distance)
            .rotated(FRAC_PI_2 - uniform(rng, 0.0, 0.3), angle, 0.0),
        );

        let leaves = count(rng, 4, 8);
        for j in 0..leaves {
            let size = uniform(rng, 0.1, 0.25);
            let along = j as f32 / leaves as f32 * 0.9 * length;
            let leaf_color = color.shifted(spread(rng, 0.1));
            ivy.push(
                round_leaf(size, leaf_color)
                    .at(angle.cos() * along, 0.05, angle.sin() * along)
                    .rotated(-FRAC_PI_2 + spread(rng, 0.25), uniform(rng, 0.0, TAU), uniform(rng, 0.0, TAU)),
            );
        }
    }
    ivy
}

// ---------------------------------------------------------------------------
// Climbing vines
// ---------------------------------------------------------------------------

/// Parameters separating the wilted vine from the revived one.
struct VineStyle {
    root_offset: f32,
    segment_radius: (f32, f32),
    bend_base: f32,
    droop: f32,
    tilt: f32,
    leaf_distance: (f32, f32),
    leaf_pitch: f32,
    leaf_pitch_jitter: f32,
}

const WILTED_VINE: VineStyle = VineStyle {
    root_offset: 0.1,
    segment_radius: (0.03, 0.04),
    bend_base: 0.1,
    droop: 0.8,
    tilt: 0.2,
    leaf_distance: (0.05, 0.1),
    leaf_pitch: FRAC_PI_2,
    leaf_pitch_jitter: 0.35,
};

const REVIVED_VINE: VineStyle = VineStyle {
    root_offset: 0.12,
    segment_radius: (0.025, 0.035),
    bend_base: 0.15,
    droop: 0.3,
    tilt: 0.1,
    leaf_distance: (0.06, 0.12),
    leaf_pitch: FRAC_PI_3,
    leaf_pitch_jitter: 0.2,
};

/// One placed vine segment; leaves and flowers hang off its centre.
struct Segment {
    centre: [f32; 3],
    height: f32,
}

/// Grow a segmented vine from the base outward, pushing segment meshes into
/// `ivy` and calling `decorate` once per segment.
#[allow(clippy::too_many_arguments)]
fn grow_vine<R: Rng + ?Sized>(
    rng: &mut R,
    ivy: &mut ShapeNode,
    style: &VineStyle,
    base_angle: f32,
    vine_height: f32,
    segments: u32,
    color: Rgb,
    bend: impl Fn(&mut R, u32) -> f32,
    mut decorate: impl FnMut(&mut R, &mut ShapeNode, &Segment),
) {
    let segment_height = vine_height / segments as f32;
    let mut prev = [base_angle.cos() * style.root_offset, 0.1, base_angle.sin() * style.root_offset];

    for j in 0..segments {
        let bend_angle = base_angle + bend(rng, j);
        let bend_distance = style.bend_base + j as f32 * 0.05;
        let centre = [
            prev[0] + bend_angle.cos() * bend_distance,
            prev[1] + segment_height / 2.0,
            prev[2] + bend_angle.sin() * bend_distance,
        ];

        ivy.push(
            ShapeNode::mesh(
                Primitive::Cylinder {
                    radius_top: style.segment_radius.0,
                    radius_bottom: style.segment_radius.1,
                    height: segment_height,
                    open_ended: false,
                },
                color,
            )
            .at(centre[0], centre[1], centre[2])
            .rotated(j as f32 / segments as f32 * style.droop, bend_angle, spread(rng, style.tilt)),
        );

        prev = [centre[0], centre[1] + segment_height / 2.0, centre[2]];
        decorate(rng, ivy, &Segment { centre, height: segment_height });
    }
}

/// Random point around a segment, `height` above its bottom.
fn around<R: Rng + ?Sized>(rng: &mut R, segment: &Segment, distance: (f32, f32), height: f32) -> [f32; 3] {
    let angle = uniform(rng, 0.0, TAU);
    let d = uniform(rng, distance.0, distance.1);
    [
        segment.centre[0] + angle.cos() * d,
        segment.centre[1] - segment.height / 2.0 + height,
        segment.centre[2] + angle.sin() * d,
    ]
}

#[allow(clippy::too_many_arguments)]
fn vine_leaf<R: Rng + ?Sized>(
    rng: &mut R,
    style: &VineStyle,
    segment: &Segment,
    k: u32,
    leaves: u32,
    size: f32,
    color: Rgb,
    shrivel: ((f32, f32), (f32, f32)),
) -> ShapeNode {
    let [x, y, z] = around(rng, segment, style.leaf_distance, k as f32 / leaves as f32 * segment.height * 0.8);
    let sx = uniform(rng, shrivel.0.0, shrivel.0.1);
    let sy = uniform(rng, shrivel.1.0, shrivel.1.1);
    round_leaf(size, color)
        .at(x, y, z)
        .rotated(
            style.leaf_pitch + spread(rng, style.leaf_pitch_jitter),
            uniform(rng, 0.0, TAU),
            uniform(rng, 0.0, TAU),
        )
        .scaled(sx, sy, 1.0)
}

/// Grey drooping vines over a dark root.
pub fn wilted_ivy<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let mut ivy = ShapeNode::group().with_child(base(uniform(rng, 0.1, 0.2), 1.3, DARK_BARK));

    let vines = count(rng, 2, 4);
    for i in 0..vines {
        let height = uniform(rng, 1.0, 2.5);
        let segments = count(rng, 3, 6);
        let color = palette::pick(rng, &palette::WILTED_IVY_STEMS);
        let base_angle = i as f32 / vines as f32 * TAU;

        grow_vine(
            rng,
            &mut ivy,
            &WILTED_VINE,
            base_angle,
            height,
            segments,
            color,
            |rng, _| spread(rng, 0.25),
            |rng, ivy, segment| {
                let leaves = count(rng, 2, 4);
                for k in 0..leaves {
                    let size = uniform(rng, 0.1, 0.2);
                    let grey = 0.4 + uniform(rng, 0.0, 0.3);
                    let leaf = vine_leaf(
                        rng,
                        &WILTED_VINE,
                        segment,
                        k,
                        leaves,
                        size * 0.8,
                        Rgb::new(grey, grey, grey),
                        ((0.8, 1.1), (0.6, 0.9)),
                    );
                    ivy.push(leaf);
                }
            },
        );
    }
    ivy
}

/// Lush climbing vines; some leaves blush purple and some segments flower.
pub fn revived_ivy<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let mut ivy = ShapeNode::group().with_child(base(uniform(rng, 0.12, 0.22), 1.3, BARK));

    let vines = count(rng, 3, 5);
    for i in 0..vines {
        let height = uniform(rng, 1.5, 3.5);
        let segments = count(rng, 4, 7);
        let color = palette::pick(rng, &palette::REVIVED_IVY);
        let base_angle = i as f32 / vines as f32 * TAU;

        grow_vine(
            rng,
            &mut ivy,
            &REVIVED_VINE,
            base_angle,
            height,
            segments,
            color,
            |_, j| (j as f32 * 0.8).sin() * 0.3,
            |rng, ivy, segment| {
                let leaves = count(rng, 3, 6);
                for k in 0..leaves {
                    let size = uniform(rng, 0.12, 0.27);
                    let leaf_color = if chance(rng, 0.15) {
                        palette::pick(rng, &palette::REVIVED_IVY_FLOWERS)
                    } else {
                        color.shifted_green(uniform(rng, -0.1, 0.2))
                    };
                    let leaf = vine_leaf(rng, &REVIVED_VINE, segment, k, leaves, size, leaf_color, ((0.9, 1.1), (0.9, 1.1)));
                    ivy.push(leaf);
                }

                if chance(rng, 0.25) {
                    for _ in 0..count(rng, 1, 3) {
                        let radius = uniform(rng, 0.08, 0.15);
                        let color = palette::pick(rng, &palette::REVIVED_IVY_FLOWERS);
                        let height = uniform(rng, 0.0, segment.height * 0.8);
                        let [x, y, z] = around(rng, segment, (0.08, 0.12), height);
                        ivy.push(ShapeNode::mesh(Primitive::Dodecahedron { radius }, color).at(x, y, z));
                    }
                }
            },
        );
    }
    ivy
}

//! Mushrooms in three varieties.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use rand::Rng;

use super::palette::{self, GILLS, PUFFBALL_DOTS};
use super::shape::{Primitive, Rgb, ShapeNode};
use crate::core::types::{chance, count, uniform};

const WHITE: u32 = 0xFFFFFF;
const YELLOW: u32 = 0xFFFF00;
const SPOT_ON_WHITE: u32 = 0x8B4513;

/// Mushroom varieties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MushroomVariety {
    /// 70%: domed cap, half of them spotted
    Cap,
    /// 20%: flat cap with pale gills
    FlatCap,
    /// 10%: squat puffball with dots
    Puffball,
}

impl MushroomVariety {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.r#gen::<f32>() {
            r if r < 0.7 => MushroomVariety::Cap,
            r if r < 0.9 => MushroomVariety::FlatCap,
            _ => MushroomVariety::Puffball,
        }
    }
}

/// Build a mushroom of a randomly rolled variety.
pub fn mushroom<R: Rng + ?Sized>(rng: &mut R) -> ShapeNode {
    let variety = MushroomVariety::roll(rng);
    mushroom_of(rng, variety)
}

/// Build a mushroom of the given variety.
pub fn mushroom_of<R: Rng + ?Sized>(rng: &mut R, variety: MushroomVariety) -> ShapeNode {
    let stem_height = uniform(rng, 0.2, 0.5);
    let thickness = uniform(rng, 0.04, 0.1);
    let mut shape = ShapeNode::group().with_child(
        ShapeNode::mesh(
            Primitive::Cylinder {
                radius_top: thickness,
                radius_bottom: thickness * 1.2,
                height: stem_height,
                open_ended: false,
            },
            palette::pick(rng, &palette::MUSHROOM_STEMS),
        )
        .at(0.0, stem_height / 2.0, 0.0),
    );

    match variety {
        MushroomVariety::Cap => {
            let cap_radius = uniform(rng, 0.15, 0.3);
            let cap_hex = palette::MUSHROOM_CAPS[rng.gen_range(0..palette::MUSHROOM_CAPS.len())];
            shape.push(
                ShapeNode::mesh(Primitive::Dome { radius: cap_radius }, Rgb::from_hex(cap_hex))
                    .at(0.0, stem_height, 0.0),
            );

            if chance(rng, 0.5) {
                let spot_hex = if cap_hex == WHITE {
                    SPOT_ON_WHITE
                } else if chance(rng, 0.8) {
                    WHITE
                } else {
                    YELLOW
                };
                for _ in 0..count(rng, 3, 9) {
                    let angle = uniform(rng, 0.0, TAU);
                    let r = uniform(rng, 0.0, cap_radius * 0.8);
                    shape.push(
                        ShapeNode::mesh(Primitive::Disc { radius: uniform(rng, 0.02, 0.05) }, Rgb::from_hex(spot_hex))
                            .at(angle.cos() * r, stem_height + 0.01, angle.sin() * r)
                            .rotated(-FRAC_PI_2, 0.0, 0.0),
                    );
                }
            }
        }
        MushroomVariety::FlatCap => {
            let cap_radius = uniform(rng, 0.2, 0.4);
            let cap_height = uniform(rng, 0.05, 0.1);
            shape.push(
                ShapeNode::mesh(
                    Primitive::Cylinder {
                        radius_top: cap_radius,
                        radius_bottom: cap_radius,
                        height: cap_height,
                        open_ended: false,
                    },
                    palette::pick(rng, &palette::FLAT_CAPS),
                )
                .at(0.0, stem_height + cap_height / 2.0, 0.0),
            );
            let gills = cap_radius * 0.95;
            shape.push(
                ShapeNode::mesh(
                    Primitive::Cylinder {
                        radius_top: gills * 0.9,
                        radius_bottom: gills,
                        height: cap_height * 0.5,
                        open_ended: true,
                    },
                    Rgb::from_hex(GILLS),
                )
                .at(0.0, stem_height + cap_height * 0.25, 0.0)
                .double_sided(),
            );
        }
        MushroomVariety::Puffball => {
            let radius = uniform(rng, 0.15, 0.3);
            let centre_y = stem_height * 0.7;
            shape.push(
                ShapeNode::mesh(Primitive::Sphere { radius }, palette::pick(rng, &palette::PUFFBALLS))
                    .at(0.0, centre_y, 0.0)
                    .scaled(1.0, 0.9, 1.0),
            );
            for _ in 0..count(rng, 5, 14) {
                let theta = uniform(rng, 0.0, PI);
                let phi = uniform(rng, 0.0, TAU);
                shape.push(
                    ShapeNode::mesh(Primitive::Sphere { radius: uniform(rng, 0.01, 0.02) }, Rgb::from_hex(PUFFBALL_DOTS)).at(
                        theta.sin() * phi.cos() * radius,
                        centre_y + theta.sin() * phi.sin() * radius,
                        theta.cos() * radius,
                    ),
                );
            }
        }
    }
    shape
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_variety_distribution() {
        let mut rng = StdRng::seed_from_u64(71);
        let mut counts = [0u32; 3];
        for _ in 0..5000 {
            counts[MushroomVariety::roll(&mut rng) as usize] += 1;
        }
        assert!((3300..3700).contains(&counts[0]), "caps {}", counts[0]);
        assert!((850..1150).contains(&counts[1]), "flat caps {}", counts[1]);
        assert!((380..620).contains(&counts[2]), "puffballs {}", counts[2]);
    }

    #[test]
    fn test_spots_contrast_with_white_caps() {
        let mut rng = StdRng::seed_from_u64(72);
        for _ in 0..300 {
            let shape = mushroom_of(&mut rng, MushroomVariety::Cap);
            let cap = shape.children[1].color.to_hex();
            for spot in &shape.children[2..] {
                let spot = spot.color.to_hex();
                if cap == WHITE {
                    assert_eq!(spot, SPOT_ON_WHITE, "white caps get brown spots");
                } else {
                    assert!(spot == WHITE || spot == YELLOW, "spot {:06X}", spot);
                }
            }
            let spots = shape.children.len() - 2;
            assert!(spots == 0 || (3..=9).contains(&spots), "spots {}", spots);
        }
    }

    #[test]
    fn test_flat_cap_has_gills() {
        let mut rng = StdRng::seed_from_u64(73);
        let shape = mushroom_of(&mut rng, MushroomVariety::FlatCap);
        assert_eq!(shape.mesh_count(), 3, "stem, cap and gills");
        assert_eq!(shape.children[2].color.to_hex(), GILLS);
    }

    #[test]
    fn test_puffball_dots() {
        let mut rng = StdRng::seed_from_u64(74);
        let shape = mushroom_of(&mut rng, MushroomVariety::Puffball);
        let dots = shape.children.len() - 2;
        assert!((5..=14).contains(&dots), "dots {}", dots);
    }
}

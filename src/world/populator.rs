//! Startup placement of decorations and revivable plants.
//!
//! Every position is drawn so that it lies within the safe radius: the tree
//! ring and rock annulus by construction, everything else by rejection
//! sampling.

use std::f32::consts::TAU;

use rand::Rng;

use crate::core::types::{Vec2, Vec3};
use crate::flora::{PlantConfig, PlantRegistry};
use crate::generation::{self, DecorationKind, PlantKind, ShapeNode, WildPlantKind, rejection_sample};

use super::config::PopulationConfig;

/// A static, non-interactive scenery item.
#[derive(Clone, Debug)]
pub struct Decoration {
    pub kind: DecorationKind,
    /// Ground-plane position (x, z).
    pub position: Vec2,
    pub rotation_y: f32,
    pub scale: Vec3,
    pub shape: ShapeNode,
}

/// Everything the populator produced.
#[derive(Clone, Debug, Default)]
pub struct PopulatedWorld {
    pub decorations: Vec<Decoration>,
    pub plants: PlantRegistry,
}

impl PopulatedWorld {
    pub fn count_of(&self, pred: impl Fn(DecorationKind) -> bool) -> usize {
        self.decorations.iter().filter(|d| pred(d.kind)).count()
    }
}

/// Uniform point in the disc of `radius`, drawn in polar form and re-checked.
pub fn sample_in_disc<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec2 {
    rejection_sample(
        || {
            let distance = rng.r#gen::<f32>() * radius;
            let angle = rng.r#gen::<f32>() * TAU;
            Vec2::new(angle.cos() * distance, angle.sin() * distance)
        },
        |p| p.length() <= radius,
    )
}

/// Point in the square `[-half, half]²` accepted by `accept`.
pub fn sample_in_square<R: Rng + ?Sized>(rng: &mut R, half: f32, accept: impl Fn(Vec2) -> bool) -> Vec2 {
    rejection_sample(
        || Vec2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half)),
        |p| accept(*p),
    )
}

/// Builds the initial world. Runs once; holds no state between calls.
pub struct WorldPopulator<'a> {
    config: &'a PopulationConfig,
    plant_config: &'a PlantConfig,
}

impl<'a> WorldPopulator<'a> {
    pub fn new(config: &'a PopulationConfig, plant_config: &'a PlantConfig) -> Self {
        Self { config, plant_config }
    }

    pub fn populate<R: Rng + ?Sized>(&self, rng: &mut R) -> PopulatedWorld {
        let mut decorations = self.trees(rng);
        let tree_count = decorations.len();
        let bushes = self.bushes(rng);
        let bush_count = bushes.len();
        decorations.extend(bushes);
        let wild = self.wild_plants(rng);
        let wild_count = wild.len();
        decorations.extend(wild);
        let rocks = self.rocks(rng);
        let rock_count = rocks.len();
        decorations.extend(rocks);

        let plants = self.plants(rng);

        log::info!(
            "Populated world: {} trees, {} bushes, {} wild plants, {} rocks, {} revivable plants",
            tree_count,
            bush_count,
            wild_count,
            rock_count,
            plants.len()
        );

        PopulatedWorld { decorations, plants }
    }

    /// Evenly partitioned ring with angular jitter.
    pub fn trees<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Decoration> {
        let cfg = &self.config.trees;
        let n = cfg.count.sample(rng);
        (0..n)
            .map(|i| {
                let shape = generation::decoration(DecorationKind::Tree, rng);
                let distance = cfg.ring_distance.sample(rng).min(self.config.safe_radius);
                let angle = i as f32 / n as f32 * TAU + rng.r#gen::<f32>() * cfg.angle_jitter;
                let s = cfg.scale.sample(rng);
                let stretch = cfg.vertical_stretch.sample(rng);
                Decoration {
                    kind: DecorationKind::Tree,
                    position: Vec2::new(angle.cos() * distance, angle.sin() * distance),
                    rotation_y: rng.r#gen::<f32>() * TAU,
                    scale: Vec3::new(s, s + stretch, s),
                    shape,
                }
            })
            .collect()
    }

    pub fn bushes<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Decoration> {
        let cfg = &self.config.bushes;
        let safe = self.config.safe_radius;
        (0..cfg.count.sample(rng))
            .map(|_| {
                let shape = generation::decoration(DecorationKind::Bush, rng);
                let position = sample_in_square(rng, cfg.half_extent, |p| {
                    let d = p.length();
                    d >= cfg.min_distance && d <= safe
                });
                let s = cfg.scale.sample(rng);
                Decoration {
                    kind: DecorationKind::Bush,
                    position,
                    rotation_y: rng.r#gen::<f32>() * TAU,
                    scale: Vec3::splat(s),
                    shape,
                }
            })
            .collect()
    }

    pub fn wild_plants<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Decoration> {
        let cfg = &self.config.wild_plants;
        (0..cfg.count.sample(rng))
            .map(|_| {
                let kind = DecorationKind::WildPlant(WildPlantKind::roll(rng));
                let shape = generation::decoration(kind, rng);
                let position = sample_in_disc(rng, self.config.safe_radius);
                let s = cfg.scale.sample(rng);
                Decoration {
                    kind,
                    position,
                    rotation_y: rng.r#gen::<f32>() * TAU,
                    scale: Vec3::splat(s),
                    shape,
                }
            })
            .collect()
    }

    pub fn rocks<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Decoration> {
        let cfg = &self.config.rocks;
        (0..cfg.count.sample(rng))
            .map(|_| {
                let shape = generation::decoration(DecorationKind::Rock, rng);
                let distance = cfg.distance.sample(rng).min(self.config.safe_radius);
                let angle = rng.r#gen::<f32>() * TAU;
                let s = cfg.scale.sample(rng);
                Decoration {
                    kind: DecorationKind::Rock,
                    position: Vec2::new(angle.cos() * distance, angle.sin() * distance),
                    rotation_y: rng.r#gen::<f32>() * TAU,
                    scale: Vec3::new(s, s * cfg.vertical_squash, s),
                    shape,
                }
            })
            .collect()
    }

    /// Revivable plants, rejection sampled from the square circumscribing the
    /// safe disc.
    pub fn plants<R: Rng + ?Sized>(&self, rng: &mut R) -> PlantRegistry {
        let cfg = &self.config.plants;
        let safe = self.config.safe_radius;
        let mut registry = PlantRegistry::new();
        for _ in 0..cfg.count.sample(rng) {
            let kind = PlantKind::roll(rng);
            let shape = generation::wilted_plant(kind, rng);
            let position = sample_in_square(rng, safe, |p| p.length() <= safe);
            let scale = cfg.scale.sample(rng);
            let rotation_y = rng.r#gen::<f32>() * TAU;
            let max_growth = self.plant_config.max_growth_scale.sample(rng);
            let id = registry.spawn(kind, position, rotation_y, scale, max_growth, shape);
            log::debug!("Plant {:?}: {} at ({:.1}, {:.1}) scale {:.2}", id, kind.name(), position.x, position.y, scale);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn populate(seed: u64) -> PopulatedWorld {
        let config = PopulationConfig::default();
        let plant_config = PlantConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        WorldPopulator::new(&config, &plant_config).populate(&mut rng)
    }

    #[test]
    fn test_everything_within_safe_radius() {
        for seed in 0..5 {
            let world = populate(seed);
            for d in &world.decorations {
                assert!(d.position.length() <= 45.0 + 1e-4, "{:?} at {:?}", d.kind, d.position);
            }
            for p in world.plants.iter() {
                assert!(p.position().length() <= 45.0, "plant {:?} at {:?}", p.id(), p.position());
            }
        }
    }

    #[test]
    fn test_counts_in_range() {
        let world = populate(11);
        let trees = world.count_of(|k| k == DecorationKind::Tree);
        let bushes = world.count_of(|k| k == DecorationKind::Bush);
        let wild = world.count_of(|k| matches!(k, DecorationKind::WildPlant(_)));
        let rocks = world.count_of(|k| k == DecorationKind::Rock);
        assert!((5..=8).contains(&trees), "trees {}", trees);
        assert!((8..=12).contains(&bushes), "bushes {}", bushes);
        assert!((80..=120).contains(&wild), "wild plants {}", wild);
        assert!((5..=10).contains(&rocks), "rocks {}", rocks);
        assert!((70..=110).contains(&world.plants.len()), "plants {}", world.plants.len());
    }

    #[test]
    fn test_placement_rules() {
        let world = populate(12);
        for d in &world.decorations {
            let dist = d.position.length();
            match d.kind {
                DecorationKind::Tree => {
                    assert!((30.0..=45.0 + 1e-4).contains(&dist), "tree ring distance {}", dist);
                    assert!(d.scale.y >= d.scale.x, "trees are stretched upward");
                }
                DecorationKind::Bush => assert!(dist >= 10.0, "bush too close to centre: {}", dist),
                DecorationKind::Rock => {
                    assert!((8.0 - 1e-4..=40.0 + 1e-4).contains(&dist), "rock distance {}", dist);
                    assert!((d.scale.y - d.scale.x * 0.7).abs() < 1e-5, "rocks are squashed");
                }
                DecorationKind::WildPlant(_) => assert!((0.4..=2.0).contains(&d.scale.x)),
            }
        }
        for p in world.plants.iter() {
            assert!((0.4..=2.0).contains(&p.scale()), "plant scale {}", p.scale());
            assert!((1.0..=2.5).contains(&p.max_growth_scale()), "growth {}", p.max_growth_scale());
            assert!(!p.is_revived());
            assert_eq!(p.revived_progress(), 0.0);
        }
    }

    #[test]
    fn test_tree_slots_are_evenly_partitioned() {
        let config = PopulationConfig::default();
        let plant_config = PlantConfig::default();
        let mut rng = StdRng::seed_from_u64(13);
        let trees = WorldPopulator::new(&config, &plant_config).trees(&mut rng);
        let n = trees.len() as f32;
        for (i, tree) in trees.iter().enumerate() {
            let slot = i as f32 / n * TAU;
            let angle = tree.position.y.atan2(tree.position.x).rem_euclid(TAU);
            let offset = (angle - slot).rem_euclid(TAU);
            assert!(offset <= 0.5 + 1e-4, "tree {} offset {} from its slot", i, offset);
        }
    }

    #[test]
    fn test_disc_sampler_rejects_outside_candidates() {
        let mut rng = StdRng::seed_from_u64(14);
        for _ in 0..1000 {
            let p = sample_in_square(&mut rng, 45.0, |p| p.length() <= 45.0);
            assert!(p.length() <= 45.0);
        }
    }
}

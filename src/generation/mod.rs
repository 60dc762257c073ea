//! Procedural shape generation.
//!
//! Every builder is a free function over an injected [`Rng`] that returns an
//! immutable [`ShapeNode`] tree. Builders never touch shared state, so the
//! same seed always yields the same shape.
//!
//! - Decorations: trees, bushes, wild plants and rocks placed once at startup.
//! - Plant kinds: each has a wilted and a revived form.
//! - Clouds: puff clusters plus the rain-drop mesh.

pub mod shape;
pub mod palette;
pub mod tree_gen;
pub mod bush_gen;
pub mod flower_gen;
pub mod grass_gen;
pub mod mushroom_gen;
pub mod ivy_gen;
pub mod tall_plant_gen;
pub mod rock_gen;
pub mod cluster_gen;
pub mod cloud_gen;

pub use shape::{LeafOutline, Primitive, Rgb, ShapeNode};

use rand::Rng;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// Revivable plant categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantKind {
    Flower,
    Bush,
    TallPlant,
    Ivy,
    Cluster,
}

impl PlantKind {
    pub const ALL: [PlantKind; 5] = [
        PlantKind::Flower,
        PlantKind::Bush,
        PlantKind::TallPlant,
        PlantKind::Ivy,
        PlantKind::Cluster,
    ];

    /// Weighted roll: 30% flower, 20% bush, 20% tall plant, 15% ivy, 15% cluster.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.r#gen::<f32>() {
            r if r < 0.3 => PlantKind::Flower,
            r if r < 0.5 => PlantKind::Bush,
            r if r < 0.7 => PlantKind::TallPlant,
            r if r < 0.85 => PlantKind::Ivy,
            _ => PlantKind::Cluster,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlantKind::Flower => "flower",
            PlantKind::Bush => "bush",
            PlantKind::TallPlant => "tallplant",
            PlantKind::Ivy => "ivy",
            PlantKind::Cluster => "cluster",
        }
    }
}

/// Non-revivable ground cover scattered across the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WildPlantKind {
    Wildflower,
    GrassTuft,
    Mushroom,
    SmallIvy,
    MixedCluster,
}

impl WildPlantKind {
    /// Weighted roll: 25% wildflower, 25% grass, 20% mushroom, 15% ivy, 15% cluster.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.r#gen::<f32>() {
            r if r < 0.25 => WildPlantKind::Wildflower,
            r if r < 0.5 => WildPlantKind::GrassTuft,
            r if r < 0.7 => WildPlantKind::Mushroom,
            r if r < 0.85 => WildPlantKind::SmallIvy,
            _ => WildPlantKind::MixedCluster,
        }
    }
}

/// Static scenery placed once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationKind {
    Tree,
    Bush,
    WildPlant(WildPlantKind),
    Rock,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Build a decoration of the given kind.
pub fn decoration<R: Rng + ?Sized>(kind: DecorationKind, rng: &mut R) -> ShapeNode {
    match kind {
        DecorationKind::Tree => tree_gen::decorative_tree(rng),
        DecorationKind::Bush => bush_gen::decorative_bush(rng),
        DecorationKind::Rock => rock_gen::rock(rng),
        DecorationKind::WildPlant(wild) => match wild {
            WildPlantKind::Wildflower => flower_gen::wildflower(rng),
            WildPlantKind::GrassTuft => grass_gen::grass_tuft(rng),
            WildPlantKind::Mushroom => mushroom_gen::mushroom(rng),
            WildPlantKind::SmallIvy => ivy_gen::small_ivy(rng),
            WildPlantKind::MixedCluster => cluster_gen::mixed_cluster(rng),
        },
    }
}

/// Build the wilted form of a plant kind.
pub fn wilted_plant<R: Rng + ?Sized>(kind: PlantKind, rng: &mut R) -> ShapeNode {
    match kind {
        PlantKind::Flower => flower_gen::wilted_flower(rng),
        PlantKind::Bush => bush_gen::wilted_bush(rng),
        PlantKind::TallPlant => tall_plant_gen::wilted_tall_plant(rng),
        PlantKind::Ivy => ivy_gen::wilted_ivy(rng),
        PlantKind::Cluster => cluster_gen::wilted_cluster(rng),
    }
}

/// Build the revived form of a plant kind. Clusters revive as a single flower.
pub fn revived_plant<R: Rng + ?Sized>(kind: PlantKind, rng: &mut R) -> ShapeNode {
    match kind {
        PlantKind::Flower | PlantKind::Cluster => flower_gen::revived_flower(rng),
        PlantKind::Bush => bush_gen::revived_bush(rng),
        PlantKind::TallPlant => tall_plant_gen::revived_tall_plant(rng),
        PlantKind::Ivy => ivy_gen::revived_ivy(rng),
    }
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// Draw candidates until one is accepted.
///
/// `draw` must eventually produce an acceptable candidate; every placement
/// distribution used by the populator has positive probability inside its
/// acceptance region.
pub fn rejection_sample<T>(mut draw: impl FnMut() -> T, accept: impl Fn(&T) -> bool) -> T {
    loop {
        let candidate = draw();
        if accept(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_plant_kind_weights() {
        let mut rng = StdRng::seed_from_u64(5);
        let n = 20_000;
        let mut counts = [0u32; 5];
        for _ in 0..n {
            counts[PlantKind::roll(&mut rng) as usize] += 1;
        }
        let expected = [0.3, 0.2, 0.2, 0.15, 0.15];
        for (kind, (&c, &e)) in PlantKind::ALL.iter().zip(counts.iter().zip(expected.iter())) {
            let share = c as f32 / n as f32;
            assert!((share - e).abs() < 0.02, "{} share {} expected {}", kind.name(), share, e);
        }
    }

    #[test]
    fn test_rejection_sample_retries_until_accepted() {
        let candidates = [(50.0_f32, 0.0_f32), (40.0, 30.0), (10.0, -12.0)];
        let mut drawn = 0;
        let hit = rejection_sample(
            || {
                let c = candidates[drawn];
                drawn += 1;
                c
            },
            |&(x, z)| (x * x + z * z).sqrt() <= 45.0,
        );
        assert_eq!(hit, (10.0, -12.0), "out-of-bound candidates are rejected");
        assert_eq!(drawn, 3, "sampler drew until it found an accepted candidate");
    }

    #[test]
    fn test_every_kind_builds_geometry() {
        let mut rng = StdRng::seed_from_u64(6);
        for kind in PlantKind::ALL {
            assert!(wilted_plant(kind, &mut rng).mesh_count() > 0, "wilted {}", kind.name());
            assert!(revived_plant(kind, &mut rng).mesh_count() > 0, "revived {}", kind.name());
        }
    }

    #[test]
    fn test_shapes_vary_between_calls() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = revived_plant(PlantKind::Bush, &mut rng);
        let b = revived_plant(PlantKind::Bush, &mut rng);
        assert_ne!(a, b, "independent draws give distinct shapes");
    }
}

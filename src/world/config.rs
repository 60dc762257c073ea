//! World population settings.

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::{CountRange, FloatRange, Result};

/// Trees stand on an evenly partitioned ring near the edge of the field.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeRingConfig {
    pub count: CountRange,
    pub ring_distance: FloatRange,
    /// Extra random angle (radians) added to each evenly spaced slot.
    pub angle_jitter: f32,
    pub scale: FloatRange,
    /// Additional vertical stretch on top of the uniform scale.
    pub vertical_stretch: FloatRange,
}

impl Default for TreeRingConfig {
    fn default() -> Self {
        Self {
            count: CountRange::new(5, 8),
            ring_distance: FloatRange::new(30.0, 45.0),
            angle_jitter: 0.5,
            scale: FloatRange::new(0.9, 1.3),
            vertical_stretch: FloatRange::new(0.0, 0.3),
        }
    }
}

/// Decorative bushes fill a square around the centre, keeping the middle clear.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BushScatterConfig {
    pub count: CountRange,
    pub half_extent: f32,
    pub min_distance: f32,
    pub scale: FloatRange,
}

impl Default for BushScatterConfig {
    fn default() -> Self {
        Self {
            count: CountRange::new(8, 12),
            half_extent: 25.0,
            min_distance: 10.0,
            scale: FloatRange::new(0.7, 1.3),
        }
    }
}

/// Count and scale of a uniformly scattered group.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    pub count: CountRange,
    pub scale: FloatRange,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: CountRange::new(80, 120),
            scale: FloatRange::new(0.4, 2.0),
        }
    }
}

/// Rocks sit on an annulus and are squashed vertically.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RockScatterConfig {
    pub count: CountRange,
    pub distance: FloatRange,
    pub scale: FloatRange,
    pub vertical_squash: f32,
}

impl Default for RockScatterConfig {
    fn default() -> Self {
        Self {
            count: CountRange::new(5, 10),
            distance: FloatRange::new(8.0, 40.0),
            scale: FloatRange::new(0.7, 2.0),
            vertical_squash: 0.7,
        }
    }
}

/// Everything placed at startup.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// No entity may be placed farther than this from the origin.
    pub safe_radius: f32,
    /// Side length of the square ground plane.
    pub ground_size: f32,
    pub trees: TreeRingConfig,
    pub bushes: BushScatterConfig,
    pub wild_plants: ScatterConfig,
    pub rocks: RockScatterConfig,
    /// Revivable plants.
    pub plants: ScatterConfig,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            safe_radius: 45.0,
            ground_size: 100.0,
            trees: TreeRingConfig::default(),
            bushes: BushScatterConfig::default(),
            wild_plants: ScatterConfig::default(),
            rocks: RockScatterConfig::default(),
            plants: ScatterConfig {
                count: CountRange::new(70, 110),
                scale: FloatRange::new(0.4, 2.0),
            },
        }
    }
}

impl PopulationConfig {
    /// Reject layouts that could place anything outside the safe radius or
    /// never terminate the rejection samplers.
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(Error::Config(msg));

        if !(self.safe_radius.is_finite() && self.safe_radius > 0.0) {
            return fail(format!("safe_radius {} must be positive", self.safe_radius));
        }
        if self.safe_radius > self.ground_size / 2.0 {
            return fail(format!(
                "safe_radius {} exceeds the ground half-size {}",
                self.safe_radius,
                self.ground_size / 2.0
            ));
        }

        for (name, range) in [
            ("trees.count", self.trees.count),
            ("bushes.count", self.bushes.count),
            ("wild_plants.count", self.wild_plants.count),
            ("rocks.count", self.rocks.count),
            ("plants.count", self.plants.count),
        ] {
            if !range.is_valid() {
                return fail(format!("{} has min > max: {:?}", name, range));
            }
        }
        for (name, range) in [
            ("trees.ring_distance", self.trees.ring_distance),
            ("trees.scale", self.trees.scale),
            ("trees.vertical_stretch", self.trees.vertical_stretch),
            ("bushes.scale", self.bushes.scale),
            ("wild_plants.scale", self.wild_plants.scale),
            ("rocks.distance", self.rocks.distance),
            ("rocks.scale", self.rocks.scale),
            ("plants.scale", self.plants.scale),
        ] {
            if !range.is_valid() || range.min < 0.0 {
                return fail(format!("{} is not a valid non-negative range: {:?}", name, range));
            }
        }

        if self.trees.ring_distance.max > self.safe_radius {
            return fail("trees.ring_distance reaches outside the safe radius".into());
        }
        if self.rocks.distance.max > self.safe_radius {
            return fail("rocks.distance reaches outside the safe radius".into());
        }
        // The bush square must contain accepted points: some corner beyond
        // min_distance and some point inside the safe radius.
        let b = &self.bushes;
        if b.half_extent <= 0.0 || b.min_distance >= b.half_extent * std::f32::consts::SQRT_2 {
            return fail("bushes.min_distance leaves no room inside the bush square".into());
        }
        if b.min_distance > self.safe_radius {
            return fail("bushes.min_distance is beyond the safe radius".into());
        }
        Ok(())
    }
}

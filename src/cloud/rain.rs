//! Rain drops hung beneath a cloud.
//!
//! Drop positions are cloud-local; a drop falls a fixed distance per tick and
//! restarts under the cloud once its world height reaches the ground.

use rand::Rng;

use crate::core::types::{Vec2, Vec3, chance, spread};

use super::config::CloudConfig;

/// Height of a splash above the ground plane.
const SPLASH_HEIGHT: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainDrop {
    /// Local (x, z) offset from the cloud centre.
    pub offset: Vec2,
    /// Local height relative to the cloud centre; negative is below.
    pub y: f32,
    pub start_y: f32,
    pub speed: f32,
}

impl RainDrop {
    /// World-space position of the drop under a cloud at `cloud`.
    #[inline]
    pub fn world_position(&self, cloud: Vec3) -> Vec3 {
        Vec3::new(cloud.x + self.offset.x, cloud.y + self.y, cloud.z + self.offset.y)
    }
}

/// The drops of one cloud. Hidden until the cloud starts raining.
#[derive(Clone, Debug, Default)]
pub struct RainShower {
    drops: Vec<RainDrop>,
    visible: bool,
}

impl RainShower {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, config: &CloudConfig) -> Self {
        let drops = (0..config.rain_drop_count)
            .map(|_| {
                let offset = Vec2::new(spread(rng, config.rain_drop_spread), spread(rng, config.rain_drop_spread));
                let start_y = -config.rain_start_depth.sample(rng);
                RainDrop {
                    offset,
                    y: start_y,
                    start_y,
                    speed: config.rain_drop_speed.sample(rng),
                }
            })
            .collect();
        Self { drops, visible: false }
    }

    #[inline]
    pub fn drops(&self) -> &[RainDrop] {
        &self.drops
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Advance every drop one tick under a cloud at `cloud`. Returns world
    /// positions of the splashes left by drops that hit the ground.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, cloud: Vec3, splash_chance: f32) -> Vec<Vec3> {
        let mut splashes = Vec::new();
        for drop in &mut self.drops {
            drop.y -= drop.speed;
            if cloud.y + drop.y <= 0.0 {
                drop.y = drop.start_y;
                if chance(rng, splash_chance) {
                    splashes.push(Vec3::new(cloud.x + drop.offset.x, SPLASH_HEIGHT, cloud.z + drop.offset.y));
                }
            }
        }
        splashes
    }
}

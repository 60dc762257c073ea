//! Weighted weather roll made when a cloud is released.

use rand::Rng;

use crate::core::types::{Vec3, spread};

use super::config::WeatherConfig;

/// Outcome of a release roll: an effect to spawn after `delay` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WeatherRoll {
    Clear,
    Rainbow { delay: f32, start: Vec3, end: Vec3 },
    Lightning { delay: f32, start: Vec3, end: Vec3 },
}

/// Roll once for a cloud released at `cloud`. End points are on the ground.
pub fn roll_weather<R: Rng + ?Sized>(rng: &mut R, config: &WeatherConfig, cloud: Vec3) -> WeatherRoll {
    let roll = rng.r#gen::<f32>();
    if roll < config.rainbow_chance {
        let offset = config.rainbow_end_offset;
        let end = Vec3::new(cloud.x + spread(rng, offset), 0.0, cloud.z + spread(rng, offset));
        WeatherRoll::Rainbow {
            delay: config.rainbow_delay_seconds,
            start: cloud,
            end,
        }
    } else if roll < config.rainbow_chance + config.lightning_chance {
        let offset = config.lightning_end_offset;
        let end = Vec3::new(cloud.x + spread(rng, offset), 0.0, cloud.z + spread(rng, offset));
        WeatherRoll::Lightning {
            delay: config.lightning_delay_seconds.sample(rng),
            start: cloud,
            end,
        }
    } else {
        WeatherRoll::Clear
    }
}

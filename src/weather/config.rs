//! Weather effect tuning.

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::{FloatRange, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Probability that releasing a cloud schedules a rainbow.
    pub rainbow_chance: f32,
    /// Probability of lightning, checked after the rainbow roll fails.
    pub lightning_chance: f32,

    pub rainbow_delay_seconds: f32,
    /// Rainbow end point lies within `±offset` of the cloud in x and z.
    pub rainbow_end_offset: f32,
    pub rainbow_duration_seconds: f32,
    /// Fraction of the duration spent fading in (and again fading out).
    pub rainbow_fade_fraction: f32,
    pub rainbow_opacity: f32,
    /// Radius of the outermost band.
    pub rainbow_radius: f32,
    /// Radius lost per inner band.
    pub rainbow_band_step: f32,
    pub rainbow_segments: u32,

    pub lightning_delay_seconds: FloatRange,
    pub lightning_end_offset: f32,
    pub lightning_segments: u32,
    /// Interior vertices deviate by up to `±deviation / 2` along each perpendicular.
    pub lightning_deviation: f32,
    /// Number of visibility toggles.
    pub lightning_flashes: u32,
    /// Base interval of the flash sequence; toggle `n` waits `interval / (n + 1)`.
    pub lightning_flash_interval: f32,
    /// Delay between the last toggle and removal.
    pub lightning_linger_seconds: f32,
    pub lightning_light_intensity: f32,
    pub lightning_light_range: f32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            rainbow_chance: 0.05,
            lightning_chance: 0.10,
            rainbow_delay_seconds: 2.0,
            rainbow_end_offset: 15.0,
            rainbow_duration_seconds: 10.0,
            rainbow_fade_fraction: 0.2,
            rainbow_opacity: 0.7,
            rainbow_radius: 15.0,
            rainbow_band_step: 0.5,
            rainbow_segments: 20,
            lightning_delay_seconds: FloatRange::new(1.0, 3.0),
            lightning_end_offset: 5.0,
            lightning_segments: 10,
            lightning_deviation: 2.0,
            lightning_flashes: 6,
            lightning_flash_interval: 0.2,
            lightning_linger_seconds: 0.1,
            lightning_light_intensity: 2.0,
            lightning_light_range: 20.0,
        }
    }
}

impl WeatherConfig {
    pub fn validate(&self) -> Result<()> {
        let p = self.rainbow_chance + self.lightning_chance;
        if self.rainbow_chance < 0.0 || self.lightning_chance < 0.0 || p.is_nan() || p > 1.0 {
            return Err(Error::Config(format!(
                "weather chances must be non-negative and sum to at most 1 (got {} + {})",
                self.rainbow_chance, self.lightning_chance
            )));
        }
        if !(0.0..=0.5).contains(&self.rainbow_fade_fraction) {
            return Err(Error::Config("rainbow_fade_fraction must lie in [0, 0.5]".into()));
        }
        if self.rainbow_duration_seconds <= 0.0 || self.rainbow_segments == 0 || self.lightning_segments == 0 {
            return Err(Error::Config("weather durations and segment counts must be positive".into()));
        }
        if !self.lightning_delay_seconds.is_valid() || self.lightning_delay_seconds.min < 0.0 {
            return Err(Error::Config(format!("invalid lightning delay {:?}", self.lightning_delay_seconds)));
        }
        Ok(())
    }
}

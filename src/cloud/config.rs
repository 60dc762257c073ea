//! Cloud lifecycle tuning.

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::{FloatRange, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Height above the picked ground point at which a cloud forms.
    pub spawn_height: FloatRange,
    /// Scale of a freshly formed cloud.
    pub initial_scale: f32,
    /// Scale added per tick until the cloud reaches full size.
    pub growth_per_tick: f32,

    /// Horizontal drift per tick at the peak of the drift wave.
    pub drift_amplitude: f32,

    /// Ground-plane distance under which a cloud starts raining on a plant.
    pub rain_radius: f32,
    /// Revival progress added to the target per raining tick.
    pub rain_progress_step: f32,

    /// Seconds after release before the cloud starts dissolving.
    pub lifetime_seconds: f32,
    /// Puff opacity removed per dissolving tick.
    pub dissolve_step: f32,

    /// Revivals after which a cloud retires early.
    pub retire_after_revivals: u32,
    /// Puff opacity of a retiring cloud.
    pub retire_opacity: f32,
    /// Seconds a retiring cloud lingers before removal.
    pub retire_delay_seconds: f32,

    // -- Rain --------------------------------------------------------------

    pub rain_drop_count: u32,
    /// Drops are spread over `[-spread, spread]` in local x and z.
    pub rain_drop_spread: f32,
    /// Distance below the cloud centre where drops start.
    pub rain_start_depth: FloatRange,
    /// Fall distance per tick.
    pub rain_drop_speed: FloatRange,
    /// Chance that a drop reaching the ground leaves a splash.
    pub splash_chance: f32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            spawn_height: FloatRange::new(15.0, 23.0),
            initial_scale: 0.1,
            growth_per_tick: 0.03,
            drift_amplitude: 0.005,
            rain_radius: 3.0,
            rain_progress_step: 0.01,
            lifetime_seconds: 10.0,
            dissolve_step: 0.01,
            retire_after_revivals: 3,
            retire_opacity: 0.3,
            retire_delay_seconds: 2.0,
            rain_drop_count: 20,
            rain_drop_spread: 1.0,
            rain_start_depth: FloatRange::new(1.0, 1.5),
            rain_drop_speed: FloatRange::new(0.02, 0.05),
            splash_chance: 0.3,
        }
    }
}

impl CloudConfig {
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("growth_per_tick", self.growth_per_tick),
            ("rain_radius", self.rain_radius),
            ("rain_progress_step", self.rain_progress_step),
            ("dissolve_step", self.dissolve_step),
            ("initial_scale", self.initial_scale),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Config(format!("cloud {} must be positive, got {}", name, value)));
            }
        }
        if self.initial_scale > 1.0 {
            return Err(Error::Config("cloud initial_scale must not exceed 1".into()));
        }
        if self.retire_after_revivals == 0 {
            return Err(Error::Config("cloud retire_after_revivals must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.splash_chance) || !(0.0..=1.0).contains(&self.retire_opacity) {
            return Err(Error::Config("cloud probabilities and opacities must lie in [0, 1]".into()));
        }
        for (name, range) in [
            ("spawn_height", self.spawn_height),
            ("rain_start_depth", self.rain_start_depth),
            ("rain_drop_speed", self.rain_drop_speed),
        ] {
            if !range.is_valid() || range.min < 0.0 {
                return Err(Error::Config(format!("cloud {} is not a valid range: {:?}", name, range)));
            }
        }
        if self.rain_drop_speed.min <= 0.0 {
            return Err(Error::Config("cloud rain drops must fall".into()));
        }
        if !self.lifetime_seconds.is_finite() || self.lifetime_seconds < 0.0 {
            return Err(Error::Config("cloud lifetime_seconds must be non-negative".into()));
        }
        Ok(())
    }
}

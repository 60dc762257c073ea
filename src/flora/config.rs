//! Plant revival and growth tuning.

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::{FloatRange, Result};

/// Per-plant lifecycle configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    /// Growth progress added per tick once revived.
    pub growth_step: f32,
    /// Seconds after revival before the wilted mesh is hidden and the revived
    /// mesh snaps to full opacity.
    pub settle_delay_seconds: f32,
    /// Final size multiplier of the revived form, drawn once per plant.
    pub max_growth_scale: FloatRange,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            growth_step: 0.001,
            settle_delay_seconds: 3.0,
            max_growth_scale: FloatRange::new(1.0, 2.5),
        }
    }
}

impl PlantConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.growth_step.is_finite() || self.growth_step <= 0.0 || self.growth_step > 1.0 {
            return Err(Error::Config(format!("plant growth_step {} must be in (0, 1]", self.growth_step)));
        }
        if !self.settle_delay_seconds.is_finite() || self.settle_delay_seconds < 0.0 {
            return Err(Error::Config("plant settle_delay_seconds must be non-negative".into()));
        }
        if !self.max_growth_scale.is_valid() || self.max_growth_scale.min <= 0.0 {
            return Err(Error::Config(format!("invalid max_growth_scale {:?}", self.max_growth_scale)));
        }
        Ok(())
    }
}

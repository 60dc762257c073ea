//! Aggregate simulation configuration, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::atmosphere::DayNightConfig;
use crate::cloud::CloudConfig;
use crate::core::camera::CameraConfig;
use crate::core::error::Error;
use crate::core::types::Result;
use crate::flora::PlantConfig;
use crate::weather::WeatherConfig;
use crate::world::PopulationConfig;

use super::magic::MagicConfig;

/// Everything a [`Simulation`](super::Simulation) needs. Missing sections and
/// fields fall back to their defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub day_night: DayNightConfig,
    pub cloud: CloudConfig,
    pub plant: PlantConfig,
    pub weather: WeatherConfig,
    pub magic: MagicConfig,
    pub camera: CameraConfig,
    pub population: PopulationConfig,
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    /// Save as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.day_night.validate()?;
        self.cloud.validate()?;
        self.plant.validate()?;
        self.weather.validate()?;
        self.magic.validate()?;
        self.population.validate()?;
        let cam = &self.camera;
        if !(cam.fov_y_degrees > 0.0 && cam.fov_y_degrees < 180.0) {
            return Err(Error::Config(format!("camera fov must be in (0, 180), got {}", cam.fov_y_degrees)));
        }
        if !(cam.near > 0.0 && cam.far > cam.near) {
            return Err(Error::Config(format!("camera clip planes invalid: near {} far {}", cam.near, cam.far)));
        }
        Ok(())
    }
}

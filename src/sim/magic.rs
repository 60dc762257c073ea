//! Magic power: spent on clouds, regenerated over time, rewarded on revival.

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MagicConfig {
    pub starting_power: f32,
    pub cloud_cost: f32,
    /// Power regenerated per tick while below the ceiling.
    pub regen_per_tick: f32,
    pub regen_ceiling: f32,
    /// Power credited per revived plant, never lifting the pool above the ceiling.
    pub revival_reward: f32,
}

impl Default for MagicConfig {
    fn default() -> Self {
        Self {
            starting_power: 1000.0,
            cloud_cost: 20.0,
            regen_per_tick: 0.1,
            regen_ceiling: 100.0,
            revival_reward: 10.0,
        }
    }
}

impl MagicConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("starting_power", self.starting_power),
            ("cloud_cost", self.cloud_cost),
            ("regen_per_tick", self.regen_per_tick),
            ("regen_ceiling", self.regen_ceiling),
            ("revival_reward", self.revival_reward),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!("magic {} must be a non-negative number, got {}", name, value)));
            }
        }
        Ok(())
    }
}

/// The resource gating cloud creation. Never negative.
#[derive(Clone, Debug)]
pub struct MagicPool {
    power: f32,
    config: MagicConfig,
}

impl MagicPool {
    pub fn new(config: MagicConfig) -> Self {
        Self {
            power: config.starting_power.max(0.0),
            config,
        }
    }

    #[inline]
    pub fn power(&self) -> f32 {
        self.power
    }

    /// Power as shown to the player.
    #[inline]
    pub fn display(&self) -> u32 {
        self.power.floor() as u32
    }

    #[inline]
    pub fn config(&self) -> &MagicConfig {
        &self.config
    }

    /// Overwrite the current power (clamped at zero).
    pub fn set_power(&mut self, power: f32) {
        self.power = power.max(0.0);
    }

    #[inline]
    pub fn can_afford_cloud(&self) -> bool {
        self.power >= self.config.cloud_cost
    }

    /// Pay for a cloud. On failure the pool is untouched.
    pub fn spend_cloud(&mut self) -> Result<()> {
        if !self.can_afford_cloud() {
            return Err(Error::InsufficientMagic {
                available: self.power,
                cost: self.config.cloud_cost,
            });
        }
        self.power -= self.config.cloud_cost;
        Ok(())
    }

    /// Passive per-tick regeneration up to the ceiling.
    pub fn regenerate(&mut self) {
        if self.power < self.config.regen_ceiling {
            self.power = (self.power + self.config.regen_per_tick).min(self.config.regen_ceiling);
        }
    }

    /// Credit a revival: `min(ceiling, power + reward)`. A pool still above
    /// the ceiling from its starting grant is clamped down to it.
    pub fn reward_revival(&mut self) {
        self.power = (self.power + self.config.revival_reward).min(self.config.regen_ceiling);
    }
}

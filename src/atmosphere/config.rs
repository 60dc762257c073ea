//! Day/night configuration with phase-keyed ramps.

use serde::{Deserialize, Serialize};

use crate::atmosphere::color_ramp::ColorRamp;
use crate::atmosphere::time::{DAY_START, DUSK_START, SUNRISE_START, SUNSET_START};
use crate::core::error::Error;
use crate::core::types::Result;

// ---------------------------------------------------------------------------
// Palettes
// ---------------------------------------------------------------------------

/// Three-stop vertical sky gradient.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkyGradient {
    pub top: [f32; 3],
    pub middle: [f32; 3],
    pub bottom: [f32; 3],
}

impl SkyGradient {
    pub const DAY: Self = Self {
        top: [0.4, 0.6, 0.9],
        middle: [0.7, 0.8, 0.95],
        bottom: [0.9, 0.9, 1.0],
    };
    pub const SUNSET: Self = Self {
        top: [0.1, 0.2, 0.5],
        middle: [0.8, 0.5, 0.2],
        bottom: [0.9, 0.6, 0.2],
    };
    pub const NIGHT: Self = Self {
        top: [0.0, 0.0, 0.1],
        middle: [0.1, 0.1, 0.2],
        bottom: [0.05, 0.05, 0.1],
    };
}

const SUN_WARM: [f32; 3] = [1.0, 0.8, 0.5];
const SUN_NEUTRAL: [f32; 3] = [1.0, 1.0, 1.0];

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Full day/night configuration. All ramps are keyed over the `[0, 1)` day
/// phase and interpolated by [`ColorRamp`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DayNightConfig {
    /// Real seconds per full day. 0 = time is paused.
    pub day_length_seconds: f32,
    /// Starting phase (0-1). 0 is midnight.
    pub start_phase: f32,
    /// Whether time advancement is paused.
    pub time_paused: bool,
    /// When set, the clock advances by this many seconds per tick instead of
    /// the measured delta (the legacy ~16 ms frame assumption is `Some(0.016)`).
    pub fixed_step_seconds: Option<f32>,
    /// Distance of the sun and moon from the origin.
    pub celestial_distance: f32,

    // -- Light -------------------------------------------------------------

    /// Sun intensity at full daylight weight and zenith.
    pub sun_peak_intensity: f32,
    /// Lower bound of the height-dependent daylight factor.
    pub daylight_floor: f32,
    /// Ambient intensity as a fraction of the daylight factor.
    pub ambient_scale: f32,
    /// Ambient intensity never drops below this.
    pub ambient_floor: f32,
    /// Moon intensity at full night weight.
    pub moon_peak_intensity: f32,
    pub moon_color: [f32; 3],

    // -- Stars -------------------------------------------------------------

    pub star_count: u32,
    pub star_radius: f32,

    // -- Audio -------------------------------------------------------------

    /// Volume of the day or night ambient track at full weight.
    pub ambient_volume: f32,
    /// Day track weight: full by day, silent at night, linear through sunrise and sunset.
    pub day_volume_ramp: ColorRamp<f32>,
    /// Night track weight, the complement of `day_volume_ramp`.
    pub night_volume_ramp: ColorRamp<f32>,

    // -- Ramps keyed by phase (0-1) -----------------------------------------

    /// 0 at night, 1 in full daylight; scales sun and ambient light.
    pub day_weight_ramp: ColorRamp<f32>,
    /// 1 at night, 0 by day; scales moonlight and star opacity.
    pub night_weight_ramp: ColorRamp<f32>,
    /// Sun color (linear RGB) over the day.
    pub sun_color_ramp: ColorRamp<[f32; 3]>,
    pub sky_top_ramp: ColorRamp<[f32; 3]>,
    pub sky_middle_ramp: ColorRamp<[f32; 3]>,
    pub sky_bottom_ramp: ColorRamp<[f32; 3]>,
}

impl Default for DayNightConfig {
    fn default() -> Self {
        let day = SkyGradient::DAY;
        let sunset = SkyGradient::SUNSET;
        let night = SkyGradient::NIGHT;

        let sky_ramp = |pick: fn(&SkyGradient) -> [f32; 3]| {
            ColorRamp::new(vec![
                (0.0, pick(&night)),
                (SUNRISE_START, pick(&sunset)),
                (DAY_START, pick(&day)),
                (SUNSET_START, pick(&day)),
                (DUSK_START, pick(&sunset)),
            ])
        };

        Self {
            day_length_seconds: 180.0, // three minutes per day
            start_phase: 0.0,
            time_paused: false,
            fixed_step_seconds: None,
            celestial_distance: 100.0,

            sun_peak_intensity: 0.8,
            daylight_floor: 0.1,
            ambient_scale: 0.5,
            ambient_floor: 0.1,
            moon_peak_intensity: 0.2,
            moon_color: [0.67, 0.67, 1.0],

            star_count: 2000,
            star_radius: 350.0,

            ambient_volume: 0.3,
            day_volume_ramp: ColorRamp::new(vec![
                (SUNRISE_START, 0.0),
                (DAY_START, 1.0),
                (SUNSET_START, 1.0),
                (DUSK_START, 0.0),
            ]),
            night_volume_ramp: ColorRamp::new(vec![
                (SUNRISE_START, 1.0),
                (DAY_START, 0.0),
                (SUNSET_START, 0.0),
                (DUSK_START, 1.0),
            ]),

            day_weight_ramp: ColorRamp::new(vec![
                (SUNRISE_START, 0.0),
                (DAY_START, 1.0),
                (SUNSET_START, 1.0),
                (DUSK_START, 0.0),
            ]),
            night_weight_ramp: ColorRamp::new(vec![
                (0.0, 1.0),
                (SUNRISE_START, 1.0),
                (DAY_START, 0.0),
                (DUSK_START, 0.0),
            ]),
            sun_color_ramp: ColorRamp::new(vec![
                (SUNRISE_START, SUN_WARM),
                (DAY_START, SUN_NEUTRAL),
                (SUNSET_START, SUN_NEUTRAL),
                (DUSK_START, SUN_WARM),
            ]),
            sky_top_ramp: sky_ramp(|g| g.top),
            sky_middle_ramp: sky_ramp(|g| g.middle),
            sky_bottom_ramp: sky_ramp(|g| g.bottom),
        }
    }
}

impl DayNightConfig {
    /// Seconds the clock should advance for a tick of measured length `dt`.
    #[inline]
    pub fn step_seconds(&self, dt: f32) -> f32 {
        self.fixed_step_seconds.unwrap_or(dt)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.day_length_seconds.is_finite() || self.day_length_seconds < 0.0 {
            return Err(Error::Config(format!(
                "day_length_seconds must be >= 0, got {}",
                self.day_length_seconds
            )));
        }
        if !(0.0..1.0).contains(&self.start_phase) {
            return Err(Error::Config(format!("start_phase must be in [0, 1), got {}", self.start_phase)));
        }
        if let Some(step) = self.fixed_step_seconds {
            if !step.is_finite() || step <= 0.0 {
                return Err(Error::Config(format!("fixed_step_seconds must be > 0, got {}", step)));
            }
        }
        if !(0.0..=1.0).contains(&self.ambient_volume) {
            return Err(Error::Config(format!("ambient_volume must be in [0, 1], got {}", self.ambient_volume)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_volume_ramps_sum_to_one() {
        let config = DayNightConfig::default();
        for i in 0..100 {
            let phase = i as f32 / 100.0;
            let day = config.day_volume_ramp.sample_or(phase, -1.0);
            let night = config.night_volume_ramp.sample_or(phase, -1.0);
            assert!((day + night - 1.0).abs() < 1e-4, "phase {}: day {} + night {} != 1", phase, day, night);
        }
    }

    #[test]
    fn test_default_weights_are_complementary_at_band_edges() {
        let config = DayNightConfig::default();
        for phase in [0.1_f32, 0.5, 0.9] {
            let day = config.day_weight_ramp.sample_or(phase, -1.0);
            let night = config.night_weight_ramp.sample_or(phase, -1.0);
            assert!(day == 0.0 || night == 0.0, "phase {}: day {} and night {} overlap", phase, day, night);
        }
    }

    #[test]
    fn test_step_seconds() {
        let mut config = DayNightConfig::default();
        assert_eq!(config.step_seconds(0.033), 0.033);
        config.fixed_step_seconds = Some(0.016);
        assert_eq!(config.step_seconds(0.033), 0.016);
    }

    #[test]
    fn test_validate() {
        assert!(DayNightConfig::default().validate().is_ok());
        let mut config = DayNightConfig::default();
        config.start_phase = 1.0;
        assert!(config.validate().is_err());
        let mut config = DayNightConfig::default();
        config.fixed_step_seconds = Some(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = DayNightConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        let back: DayNightConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.day_length_seconds, 180.0);
        assert_eq!(
            back.sky_middle_ramp.sample_or(0.75, [0.0; 3]),
            config.sky_middle_ramp.sample_or(0.75, [0.0; 3])
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let back: DayNightConfig = serde_json::from_str(r#"{"day_length_seconds": 60.0}"#).expect("deserialize");
        assert_eq!(back.day_length_seconds, 60.0);
        assert_eq!(back.star_count, 2000);
    }
}

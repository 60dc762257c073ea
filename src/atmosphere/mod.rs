//! Day/night cycle.
//!
//! A single normalized phase drives everything: sun and moon placement, light
//! intensities and colors, the sky gradient, star opacity and the ambient audio
//! cross-fade. The main entry point is [`DayNightClock`], which is updated each
//! tick and produces a [`SkyState`] (CPU-side) and [`SkyUniform`] (GPU-ready).

pub mod color_ramp;
pub mod config;
pub mod stars;
pub mod state;
pub mod sun;
pub mod time;

// Re-exports
pub use color_ramp::{ColorRamp, Lerp};
pub use config::{DayNightConfig, SkyGradient};
pub use stars::StarField;
pub use state::{SkyState, SkyUniform};
pub use time::{DayBand, TimeOfDay};

use sun::{compute_moon_position, compute_sun_position, daylight_factor};

// ---------------------------------------------------------------------------
// DayNightClock
// ---------------------------------------------------------------------------

/// Main day/night system. Call [`update`](Self::update) each tick, then read
/// the resulting [`state`](Self::state) or [`uniform`](Self::uniform).
pub struct DayNightClock {
    config: DayNightConfig,
    time: TimeOfDay,
    shader_time: f32,
    state: SkyState,
}

impl DayNightClock {
    /// Create a new clock from the given configuration.
    pub fn new(config: DayNightConfig) -> Self {
        let time = TimeOfDay::new(config.start_phase);
        let mut clock = Self {
            config,
            time,
            shader_time: 0.0,
            state: SkyState::default(),
        };
        clock.recompute_state();
        clock
    }

    /// Advance by a tick of `dt` measured seconds and recompute all state.
    pub fn update(&mut self, dt: f32) {
        let step = self.config.step_seconds(dt);
        if !self.config.time_paused {
            self.time.advance(step, self.config.day_length_seconds);
        }
        if dt.is_finite() && dt > 0.0 {
            self.shader_time += dt;
        }
        self.recompute_state();
    }

    /// Current sky state (CPU-side).
    #[inline]
    pub fn state(&self) -> &SkyState {
        &self.state
    }

    /// Build a GPU-ready uniform from current state.
    pub fn uniform(&self) -> SkyUniform {
        SkyUniform::from(&self.state)
    }

    /// Current day phase in `[0, 1)`.
    #[inline]
    pub fn phase(&self) -> f32 {
        self.time.phase()
    }

    /// Immutable reference to the configuration.
    #[inline]
    pub fn config(&self) -> &DayNightConfig {
        &self.config
    }

    /// Mutable reference to the configuration.
    ///
    /// After modifying, call [`update`](Self::update) (even with dt=0) to
    /// recompute state.
    #[inline]
    pub fn config_mut(&mut self) -> &mut DayNightConfig {
        &mut self.config
    }

    /// Set the phase and immediately recompute state.
    pub fn set_phase(&mut self, phase: f32) {
        self.time.set(phase);
        self.recompute_state();
    }

    /// Whether the sun is off (night or dusk).
    #[inline]
    pub fn is_night(&self) -> bool {
        !self.state.sun_visible()
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    /// Recompute all state from the current phase and config.
    fn recompute_state(&mut self) {
        let cfg = &self.config;
        let phase = self.time.phase();

        let day_weight = cfg.day_weight_ramp.sample_or(phase, 0.0).clamp(0.0, 1.0);
        let night_weight = cfg.night_weight_ramp.sample_or(phase, 0.0).clamp(0.0, 1.0);
        let daylight = daylight_factor(phase, cfg.daylight_floor);

        // Sun: height-dependent intensity, faded in and out by the day weight
        let sun_intensity = day_weight * daylight * cfg.sun_peak_intensity;
        let sun_color = cfg.sun_color_ramp.sample_or(phase, [1.0; 3]);

        // Ambient follows the daylight, with a floor so nights are not black
        let ambient_intensity = (day_weight * daylight * cfg.ambient_scale).max(cfg.ambient_floor);

        let moon_intensity = night_weight * cfg.moon_peak_intensity;

        self.state = SkyState {
            phase,
            day_count: self.time.day_count(),
            band: self.time.band(),
            shader_time: self.shader_time,
            sun_position: compute_sun_position(phase, cfg.celestial_distance).to_array(),
            sun_color,
            sun_intensity,
            moon_position: compute_moon_position(phase, cfg.celestial_distance).to_array(),
            moon_color: cfg.moon_color,
            moon_intensity,
            ambient_intensity,
            sky_top: cfg.sky_top_ramp.sample_or(phase, SkyGradient::DAY.top),
            sky_middle: cfg.sky_middle_ramp.sample_or(phase, SkyGradient::DAY.middle),
            sky_bottom: cfg.sky_bottom_ramp.sample_or(phase, SkyGradient::DAY.bottom),
            star_opacity: night_weight,
            day_volume: cfg.day_volume_ramp.sample_or(phase, 0.0) * cfg.ambient_volume,
            night_volume: cfg.night_volume_ramp.sample_or(phase, 0.0) * cfg.ambient_volume,
        };
    }
}

impl Default for DayNightClock {
    fn default() -> Self {
        Self::new(DayNightConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_at(phase: f32) -> DayNightClock {
        let mut clock = DayNightClock::default();
        clock.set_phase(phase);
        clock
    }

    #[test]
    fn test_midday_sun_peaks_and_night_is_off() {
        let clock = clock_at(0.5);
        let s = clock.state();
        assert!((s.sun_intensity - 0.8).abs() < 1e-5, "midday sun = {}", s.sun_intensity);
        assert_eq!(s.moon_intensity, 0.0, "moon must be exactly off at midday");
        assert_eq!(s.star_opacity, 0.0, "stars must be exactly off at midday");
        assert_eq!(s.sun_color, [1.0, 1.0, 1.0]);
        assert_eq!(s.band, DayBand::Daytime);
    }

    #[test]
    fn test_midday_is_local_maximum() {
        let peak = clock_at(0.5).state().sun_intensity;
        for phase in [0.35, 0.45, 0.55, 0.65] {
            let v = clock_at(phase).state().sun_intensity;
            assert!(v <= peak + 1e-6, "sun at {} ({}) exceeds midday ({})", phase, v, peak);
        }
    }

    #[test]
    fn test_deep_night() {
        let clock = clock_at(0.1);
        let s = clock.state();
        assert_eq!(s.sun_intensity, 0.0);
        assert!((s.moon_intensity - 0.2).abs() < 1e-6);
        assert_eq!(s.star_opacity, 1.0);
        assert!((s.ambient_intensity - 0.1).abs() < 1e-6, "night ambient = {}", s.ambient_intensity);
        assert!(clock.is_night());
    }

    #[test]
    fn test_sunrise_is_a_linear_crossfade() {
        let s = clock_at(0.25).state().clone();
        assert!((s.star_opacity - 0.5).abs() < 1e-4, "stars halfway through sunrise = {}", s.star_opacity);
        assert!((s.day_volume - 0.15).abs() < 1e-4);
        assert!((s.night_volume - 0.15).abs() < 1e-4);
        // Warm (1, 0.8, 0.5) halfway to neutral white
        assert!((s.sun_color[1] - 0.9).abs() < 1e-4 && (s.sun_color[2] - 0.75).abs() < 1e-4, "sun color {:?}", s.sun_color);
    }

    #[test]
    fn test_sunset_crossfades_into_the_night_track() {
        let s = clock_at(0.75).state().clone();
        assert!((s.day_volume - 0.15).abs() < 1e-4, "day track halfway out = {}", s.day_volume);
        assert!((s.night_volume - 0.15).abs() < 1e-4, "night track halfway in = {}", s.night_volume);

        let s = clock_at(0.8).state().clone();
        assert!(s.day_volume.abs() < 1e-4);
        assert!((s.night_volume - 0.3).abs() < 1e-4, "night track at full volume by dusk = {}", s.night_volume);

        for phase in [0.05_f32, 0.5, 0.72, 0.78, 0.9] {
            let s = clock_at(phase).state().clone();
            assert!((s.day_volume + s.night_volume - 0.3).abs() < 1e-4, "phase {}: volumes never dip", phase);
        }
    }

    #[test]
    fn test_sky_gradient_bands() {
        assert_eq!(clock_at(0.5).state().sky_top, SkyGradient::DAY.top);
        assert_eq!(clock_at(0.0).state().sky_middle, SkyGradient::NIGHT.middle);
        assert_eq!(clock_at(0.8).state().sky_bottom, SkyGradient::SUNSET.bottom);
    }

    #[test]
    fn test_dusk_fades_stars_in() {
        let early = clock_at(0.82).state().star_opacity;
        let late = clock_at(0.98).state().star_opacity;
        assert!(early < late, "stars should brighten through dusk: {} -> {}", early, late);
        assert_eq!(clock_at(0.85).state().sun_intensity, 0.0, "sun is off at dusk");
    }

    #[test]
    fn test_update_wraps_after_full_day() {
        let mut clock = DayNightClock::default();
        let ticks = 180 * 60 + 30; // one day plus half a second at 60 Hz
        for _ in 0..ticks {
            clock.update(1.0 / 60.0);
        }
        let expected = (ticks as f64 / 60.0 / 180.0).rem_euclid(1.0) as f32;
        assert!((clock.phase() - expected).abs() < 1e-4, "phase {} vs {}", clock.phase(), expected);
        assert_eq!(clock.state().day_count, 1);
        assert!((clock.state().shader_time - ticks as f32 / 60.0).abs() < 0.05);
    }

    #[test]
    fn test_fixed_step_ignores_measured_delta() {
        let mut config = DayNightConfig::default();
        config.fixed_step_seconds = Some(0.016);
        let mut clock = DayNightClock::new(config);
        clock.update(1.0); // a slow frame still advances one fixed step
        assert!((clock.phase() - 0.016 / 180.0).abs() < 1e-7);
    }

    #[test]
    fn test_paused() {
        let mut config = DayNightConfig::default();
        config.time_paused = true;
        config.start_phase = 0.4;
        let mut clock = DayNightClock::new(config);
        clock.update(5.0);
        assert!((clock.phase() - 0.4).abs() < 1e-6);
    }
}

//! Seven-band rainbow arc that fades in, holds and fades out.

use std::f32::consts::FRAC_PI_2;

use crate::core::types::Vec3;
use crate::generation::{Rgb, palette};

use super::config::WeatherConfig;

#[derive(Clone, Debug)]
pub struct RainbowBand {
    pub color: Rgb,
    pub radius: f32,
    /// Polyline of the arc in world space.
    pub points: Vec<Vec3>,
}

#[derive(Clone, Debug)]
pub struct Rainbow {
    pub start: Vec3,
    pub end: Vec3,
    pub bands: Vec<RainbowBand>,
    born: f64,
    duration: f32,
    fade_fraction: f32,
    peak_opacity: f32,
}

/// Quarter arc of `radius` centred on `ground`, from straight above it down
/// to the ground along `dir`.
fn quarter_arc(ground: Vec3, dir: Vec3, radius: f32, segments: u32) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| {
            let theta = i as f32 / segments as f32 * FRAC_PI_2;
            ground + dir * (radius * theta.sin()) + Vec3::Y * (radius * theta.cos())
        })
        .collect()
}

impl Rainbow {
    /// Build the arc from above the ground point under `start` toward `end`.
    pub fn new(start: Vec3, end: Vec3, now: f64, config: &WeatherConfig) -> Self {
        let ground = Vec3::new(start.x, 0.0, start.z);
        let dir = Vec3::new(end.x - start.x, 0.0, end.z - start.z).try_normalize().unwrap_or(Vec3::X);

        let bands = palette::RAINBOW
            .iter()
            .enumerate()
            .map(|(i, &hex)| {
                let radius = config.rainbow_radius - config.rainbow_band_step * i as f32;
                RainbowBand {
                    color: Rgb::from_hex(hex),
                    radius,
                    points: quarter_arc(ground, dir, radius, config.rainbow_segments),
                }
            })
            .collect();

        Self {
            start,
            end,
            bands,
            born: now,
            duration: config.rainbow_duration_seconds,
            fade_fraction: config.rainbow_fade_fraction,
            peak_opacity: config.rainbow_opacity,
        }
    }

    pub fn progress(&self, now: f64) -> f32 {
        (((now - self.born) / self.duration as f64) as f32).clamp(0.0, 1.0)
    }

    /// Fade envelope: ramp up over the first fraction, hold, ramp down over
    /// the last fraction.
    pub fn fade(&self, now: f64) -> f32 {
        let p = self.progress(now);
        let f = self.fade_fraction;
        if f <= 0.0 {
            return if p < 1.0 { 1.0 } else { 0.0 };
        }
        if p < f {
            p / f
        } else if p > 1.0 - f {
            (1.0 - p) / f
        } else {
            1.0
        }
    }

    /// Band opacity at `now`.
    pub fn opacity(&self, now: f64) -> f32 {
        self.peak_opacity * self.fade(now)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rainbow() -> Rainbow {
        Rainbow::new(Vec3::new(2.0, 20.0, 3.0), Vec3::new(12.0, 0.0, 3.0), 0.0, &WeatherConfig::default())
    }

    #[test]
    fn test_bands() {
        let r = rainbow();
        assert_eq!(r.bands.len(), 7);
        assert_eq!(r.bands[0].color.to_hex(), 0xFF0000, "outer band is red");
        assert_eq!(r.bands[6].color.to_hex(), 0x9400D3, "inner band is violet");
        for (i, band) in r.bands.iter().enumerate() {
            assert!((band.radius - (15.0 - 0.5 * i as f32)).abs() < 1e-6);
            assert_eq!(band.points.len(), 21, "20 segments");
        }
    }

    #[test]
    fn test_arc_geometry() {
        let r = rainbow();
        let band = &r.bands[0];
        let top = band.points[0];
        let foot = band.points[20];
        assert!((top - Vec3::new(2.0, 15.0, 3.0)).length() < 1e-4, "arc starts above the cloud's ground point");
        assert!((foot - Vec3::new(17.0, 0.0, 3.0)).length() < 1e-4, "arc lands toward the end point");
        for p in &band.points {
            let d = (*p - Vec3::new(2.0, 0.0, 3.0)).length();
            assert!((d - 15.0).abs() < 1e-3, "points lie on the band radius");
        }
    }

    #[test]
    fn test_fade_envelope() {
        let r = rainbow();
        assert_eq!(r.opacity(0.0), 0.0);
        assert!((r.opacity(1.0) - 0.35).abs() < 1e-5, "halfway through fade-in");
        assert!((r.opacity(5.0) - 0.7).abs() < 1e-6, "hold");
        assert!((r.opacity(9.0) - 0.35).abs() < 1e-5, "halfway through fade-out");
        assert!(!r.is_finished(9.99));
        assert!(r.is_finished(10.0));
    }
}

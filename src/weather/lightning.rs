//! Jagged lightning bolt with a point light that flashes a few times.

use rand::Rng;

use crate::core::types::{Vec3, spread};
use crate::generation::{Rgb, palette};

use super::config::WeatherConfig;

#[derive(Clone, Debug)]
pub struct Lightning {
    /// Polyline from the cloud down to the ground.
    pub points: Vec<Vec3>,
    pub color: Rgb,
    /// Point light at the strike position.
    pub light_position: Vec3,
    pub light_intensity: f32,
    pub light_range: f32,
    born: f64,
    /// Seconds after spawn at which visibility toggles.
    toggles: Vec<f32>,
    lifetime: f32,
}

/// Toggle times of a flash sequence: the first at spawn, each later one
/// `interval / (n + 1)` after the previous.
pub fn flash_schedule(flashes: u32, interval: f32) -> Vec<f32> {
    let mut t = 0.0;
    (0..flashes)
        .map(|n| {
            if n > 0 {
                t += interval / (n + 1) as f32;
            }
            t
        })
        .collect()
}

impl Lightning {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, start: Vec3, end: Vec3, now: f64, config: &WeatherConfig) -> Self {
        let segments = config.lightning_segments.max(1);
        let delta = end - start;
        let dir = delta.try_normalize().unwrap_or(Vec3::NEG_Y);
        let step = delta.length() / segments as f32;
        let perp1 = Vec3::new(-dir.z, 0.0, dir.x).try_normalize().unwrap_or(Vec3::X);
        let perp2 = dir.cross(perp1).try_normalize().unwrap_or(Vec3::Z);
        let half = config.lightning_deviation / 2.0;

        let mut points = Vec::with_capacity(segments as usize + 1);
        points.push(start);
        for i in 1..segments {
            let base = start + dir * (step * i as f32);
            points.push(base + perp1 * spread(rng, half) + perp2 * spread(rng, half));
        }
        points.push(end);

        let toggles = flash_schedule(config.lightning_flashes, config.lightning_flash_interval);
        let lifetime = toggles.last().copied().unwrap_or(0.0) + config.lightning_linger_seconds;

        Self {
            points,
            color: Rgb::from_hex(palette::LIGHTNING),
            light_position: end,
            light_intensity: config.lightning_light_intensity,
            light_range: config.lightning_light_range,
            born: now,
            toggles,
            lifetime,
        }
    }

    /// Seconds from spawn to removal.
    #[inline]
    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    /// Bolt and light are visible before the first toggle and after every
    /// even number of toggles.
    pub fn is_visible(&self, now: f64) -> bool {
        let age = (now - self.born) as f32;
        let toggled = self.toggles.iter().filter(|&&t| t <= age).count();
        toggled % 2 == 0 && !self.is_finished(now)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        (now - self.born) as f32 >= self.lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_flash_schedule_accelerates() {
        let t = flash_schedule(6, 0.2);
        let expected = [0.0, 0.1, 0.16667, 0.21667, 0.25667, 0.29];
        assert_eq!(t.len(), 6);
        for (got, want) in t.iter().zip(expected) {
            assert!((got - want).abs() < 1e-4, "toggle at {} expected {}", got, want);
        }
    }

    #[test]
    fn test_bolt_path() {
        let mut rng = StdRng::seed_from_u64(171);
        let start = Vec3::new(0.0, 20.0, 0.0);
        let end = Vec3::new(3.0, 0.0, -2.0);
        let bolt = Lightning::new(&mut rng, start, end, 0.0, &WeatherConfig::default());
        assert_eq!(bolt.points.len(), 11, "10 segments");
        assert_eq!(bolt.points[0], start);
        assert_eq!(bolt.points[10], end);
        let dir = (end - start).normalize();
        let step = (end - start).length() / 10.0;
        for (i, p) in bolt.points.iter().enumerate().take(10).skip(1) {
            let base = start + dir * (step * i as f32);
            // Two perpendicular deviations of at most 1 each.
            assert!((*p - base).length() <= 2.0_f32.sqrt() + 1e-4, "vertex {} strays {}", i, (*p - base).length());
        }
        assert_eq!(bolt.light_position, end);
        assert_eq!(bolt.color.to_hex(), 0x80F0FF);
    }

    #[test]
    fn test_flashing_visibility() {
        let mut rng = StdRng::seed_from_u64(172);
        let bolt = Lightning::new(&mut rng, Vec3::Y * 20.0, Vec3::ZERO, 5.0, &WeatherConfig::default());
        assert!(!bolt.is_visible(5.0), "the first toggle hides the bolt at spawn");
        assert!(bolt.is_visible(5.12));
        assert!(!bolt.is_visible(5.18));
        assert!(bolt.is_visible(5.23));
        assert!(!bolt.is_visible(5.27));
        assert!(bolt.is_visible(5.3), "visible after the sixth toggle");
        assert!((bolt.lifetime() - 0.39).abs() < 1e-4);
        assert!(!bolt.is_finished(5.38));
        assert!(bolt.is_finished(5.4));
        assert!(!bolt.is_visible(5.4));
    }
}

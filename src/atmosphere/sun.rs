//! Sun and moon placement.
//!
//! Both bodies travel a vertical circle in the XY plane. The sun's angle is
//! `phase * 2π - π/2`, so it sits at the nadir at phase 0, rises through the
//! +X horizon at 0.25, peaks at 0.5 and sets at 0.75. The moon is antipodal.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

/// Orbital angle of the sun for a day phase.
#[inline]
pub fn sun_angle(phase: f32) -> f32 {
    phase * TAU - FRAC_PI_2
}

/// Sun position at `distance` from the origin.
pub fn compute_sun_position(phase: f32, distance: f32) -> Vec3 {
    let angle = sun_angle(phase);
    Vec3::new(angle.cos() * distance, angle.sin() * distance, 0.0)
}

/// Moon position: the point opposite the sun.
pub fn compute_moon_position(phase: f32, distance: f32) -> Vec3 {
    -compute_sun_position(phase, distance)
}

/// Height-dependent daylight factor `max(floor, sin(angle))`.
#[inline]
pub fn daylight_factor(phase: f32, floor: f32) -> f32 {
    sun_angle(phase).sin().max(floor)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
        (a - b).abs().max_element() < eps
    }

    #[test]
    fn test_midday_is_overhead() {
        let pos = compute_sun_position(0.5, 100.0);
        assert!(vec3_approx_eq(pos, Vec3::new(0.0, 100.0, 0.0), 1e-3), "midday sun = {:?}", pos);
    }

    #[test]
    fn test_sunrise_on_horizon() {
        let pos = compute_sun_position(0.25, 100.0);
        assert!(pos.y.abs() < 1e-3, "sunrise sun Y = {} should be near 0", pos.y);
        assert!(pos.x > 99.0, "sun rises on +X, got {:?}", pos);
    }

    #[test]
    fn test_midnight_below() {
        let pos = compute_sun_position(0.0, 100.0);
        assert!((pos.y + 100.0).abs() < 1e-3, "midnight sun Y = {}", pos.y);
    }

    #[test]
    fn test_moon_is_antipodal() {
        for i in 0..20 {
            let phase = i as f32 / 20.0;
            let sun = compute_sun_position(phase, 100.0);
            let moon = compute_moon_position(phase, 100.0);
            assert!(vec3_approx_eq(sun + moon, Vec3::ZERO, 1e-3), "phase {}: sun {:?} moon {:?}", phase, sun, moon);
        }
    }

    #[test]
    fn test_daylight_factor_floor() {
        assert!((daylight_factor(0.5, 0.1) - 1.0).abs() < 1e-5);
        assert_eq!(daylight_factor(0.0, 0.1), 0.1, "below horizon clamps to the floor");
    }
}

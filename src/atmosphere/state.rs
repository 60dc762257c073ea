//! Sky runtime state and GPU uniform.

use bytemuck::{Pod, Zeroable};

use crate::atmosphere::time::DayBand;

// ---------------------------------------------------------------------------
// CPU-side state
// ---------------------------------------------------------------------------

/// Full sky state computed each tick by [`super::DayNightClock`].
#[derive(Clone, Debug)]
pub struct SkyState {
    // Time
    pub phase: f32,
    pub day_count: u32,
    pub band: DayBand,
    /// Accumulated seconds, for animated shader uniforms (terrain border glow).
    pub shader_time: f32,

    // Sun
    pub sun_position: [f32; 3],
    pub sun_color: [f32; 3],
    pub sun_intensity: f32,

    // Moon
    pub moon_position: [f32; 3],
    pub moon_color: [f32; 3],
    pub moon_intensity: f32,

    // Ambient
    pub ambient_intensity: f32,

    // Sky gradient
    pub sky_top: [f32; 3],
    pub sky_middle: [f32; 3],
    pub sky_bottom: [f32; 3],

    // Stars
    pub star_opacity: f32,

    // Ambient audio cross-fade targets
    pub day_volume: f32,
    pub night_volume: f32,
}

impl SkyState {
    #[inline]
    pub fn sun_visible(&self) -> bool {
        self.sun_intensity > 0.0
    }

    #[inline]
    pub fn moon_visible(&self) -> bool {
        self.moon_intensity > 0.0
    }

    #[inline]
    pub fn stars_visible(&self) -> bool {
        self.star_opacity > 0.0
    }
}

impl Default for SkyState {
    fn default() -> Self {
        Self {
            phase: 0.0,
            day_count: 0,
            band: DayBand::Night,
            shader_time: 0.0,
            sun_position: [0.0, -100.0, 0.0],
            sun_color: [1.0, 0.8, 0.5],
            sun_intensity: 0.0,
            moon_position: [0.0, 100.0, 0.0],
            moon_color: [0.67, 0.67, 1.0],
            moon_intensity: 0.2,
            ambient_intensity: 0.1,
            sky_top: [0.0, 0.0, 0.1],
            sky_middle: [0.1, 0.1, 0.2],
            sky_bottom: [0.05, 0.05, 0.1],
            star_opacity: 1.0,
            day_volume: 0.0,
            night_volume: 0.3,
        }
    }
}

// ---------------------------------------------------------------------------
// GPU uniform
// ---------------------------------------------------------------------------

/// GPU-ready sky uniform buffer.
///
/// All `vec3` fields are padded to 16-byte alignment for WGSL compatibility.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SkyUniform {
    // -- Sun (32 bytes) --
    pub sun_position: [f32; 3],
    pub sun_intensity: f32,
    pub sun_color: [f32; 3],
    pub phase: f32,

    // -- Moon (32 bytes) --
    pub moon_position: [f32; 3],
    pub moon_intensity: f32,
    pub moon_color: [f32; 3],
    pub ambient_intensity: f32,

    // -- Gradient (48 bytes) --
    pub sky_top: [f32; 3],
    pub star_opacity: f32,
    pub sky_middle: [f32; 3],
    pub shader_time: f32,
    pub sky_bottom: [f32; 3],
    pub _pad0: f32,
}

impl From<&SkyState> for SkyUniform {
    fn from(s: &SkyState) -> Self {
        Self {
            sun_position: s.sun_position,
            sun_intensity: s.sun_intensity,
            sun_color: s.sun_color,
            phase: s.phase,
            moon_position: s.moon_position,
            moon_intensity: s.moon_intensity,
            moon_color: s.moon_color,
            ambient_intensity: s.ambient_intensity,
            sky_top: s.sky_top,
            star_opacity: s.star_opacity,
            sky_middle: s.sky_middle,
            shader_time: s.shader_time,
            sky_bottom: s.sky_bottom,
            _pad0: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_is_16_byte_aligned() {
        let size = std::mem::size_of::<SkyUniform>();
        assert_eq!(size % 16, 0, "SkyUniform size {} must be a multiple of 16", size);
        assert_eq!(size, 112);
    }

    #[test]
    fn test_uniform_copies_state() {
        let state = SkyState {
            star_opacity: 0.4,
            shader_time: 12.5,
            ..SkyState::default()
        };
        let uniform = SkyUniform::from(&state);
        assert_eq!(uniform.star_opacity, 0.4);
        assert_eq!(uniform.shader_time, 12.5);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 112);
    }
}

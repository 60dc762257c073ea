//! Keyboard camera controller

use crate::core::camera::{Camera, CameraConfig};
use crate::core::input::{InputState, Key};
use crate::core::types::Vec3;

/// Translates the camera (eye and look target together) while movement keys are held.
///
/// Speeds are per tick: horizontal motion follows the camera's ground-projected
/// forward/right axes, vertical motion is along world Y.
pub struct CameraController {
    /// Horizontal units per tick
    pub movement_speed: f32,
    /// Vertical units per tick
    pub vertical_speed: f32,
}

impl CameraController {
    /// Create new controller
    pub fn new(movement_speed: f32, vertical_speed: f32) -> Self {
        Self {
            movement_speed,
            vertical_speed,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.movement_speed, config.vertical_speed)
    }

    /// Apply one tick of movement. Returns the applied offset.
    pub fn update(&self, camera: &mut Camera, input: &InputState) -> Vec3 {
        let forward = camera.ground_forward();
        let right = camera.ground_right();
        let mut offset = Vec3::ZERO;

        if input.is_key_pressed(Key::Forward) {
            offset += forward * self.movement_speed;
        }
        if input.is_key_pressed(Key::Back) {
            offset -= forward * self.movement_speed;
        }
        if input.is_key_pressed(Key::Left) {
            offset -= right * self.movement_speed;
        }
        if input.is_key_pressed(Key::Right) {
            offset += right * self.movement_speed;
        }
        if input.is_key_pressed(Key::Up) {
            offset.y += self.vertical_speed;
        }
        if input.is_key_pressed(Key::Down) {
            offset.y -= self.vertical_speed;
        }

        if offset != Vec3::ZERO {
            camera.translate(offset);
        }
        offset
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_does_not_move() {
        let controller = CameraController::default();
        let mut camera = Camera::default();
        let before = camera.position;
        controller.update(&mut camera, &InputState::new());
        assert_eq!(camera.position, before);
    }

    #[test]
    fn test_forward_moves_eye_and_target() {
        let controller = CameraController::default();
        let mut camera = Camera::default();
        let mut input = InputState::new();
        input.key_down(Key::Forward);

        let eye = camera.position;
        let target = camera.target;
        controller.update(&mut camera, &input);

        assert!((camera.position.z - (eye.z - 0.5)).abs() < 1e-4, "eye z = {}", camera.position.z);
        assert_eq!(camera.position.y, eye.y, "forward motion stays horizontal");
        assert!((camera.target.z - (target.z - 0.5)).abs() < 1e-4, "target follows eye");
    }

    #[test]
    fn test_vertical_and_opposites_cancel() {
        let controller = CameraController::default();
        let mut camera = Camera::default();
        let mut input = InputState::new();
        input.key_down(Key::Up);
        input.key_down(Key::Left);
        input.key_down(Key::Right);

        let offset = controller.update(&mut camera, &input);
        assert!(offset.x.abs() < 1e-6, "left and right cancel, got {}", offset.x);
        assert!((offset.y - 0.3).abs() < 1e-6);
    }
}

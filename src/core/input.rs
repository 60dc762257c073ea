//! Input state tracking

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::types::Vec2;

/// Camera movement keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Map a host key name (`"w"`, `"a"`, `"s"`, `"d"`, `" "`/`"space"`, `"shift"`)
    /// to a movement key. Matching is case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "w" => Some(Key::Forward),
            "s" => Some(Key::Back),
            "a" => Some(Key::Left),
            "d" => Some(Key::Right),
            " " | "space" => Some(Key::Up),
            "shift" | "shiftleft" | "shiftright" => Some(Key::Down),
            _ => None,
        }
    }
}

/// Tracks held keys and the pointer
pub struct InputState {
    /// Currently pressed keys
    keys_pressed: HashSet<Key>,
    /// Pointer position in normalized device coordinates (-1..1, +y up)
    pointer: Vec2,
    /// Whether the primary pointer button is held
    pointer_pressed: bool,
    /// Viewport size in pixels
    viewport: (u32, u32),
}

impl InputState {
    /// Create new input state
    pub fn new() -> Self {
        Self {
            keys_pressed: HashSet::new(),
            pointer: Vec2::ZERO,
            pointer_pressed: false,
            viewport: (1280, 720),
        }
    }

    pub fn key_down(&mut self, key: Key) {
        self.keys_pressed.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys_pressed.remove(&key);
    }

    /// Check if a key is currently pressed
    #[inline]
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Record the pointer position in pixels, converting to NDC.
    pub fn set_pointer_pixels(&mut self, x: f32, y: f32) {
        self.pointer = Self::pixel_to_ndc(x, y, self.viewport);
    }

    /// Record the pointer position directly in NDC.
    pub fn set_pointer_ndc(&mut self, ndc: Vec2) {
        self.pointer = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    /// Pointer position in NDC
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn set_pointer_pressed(&mut self, pressed: bool) {
        self.pointer_pressed = pressed;
    }

    #[inline]
    pub fn is_pointer_pressed(&self) -> bool {
        self.pointer_pressed
    }

    /// Record a viewport resize. Zero dimensions are clamped to one pixel.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width.max(1), height.max(1));
    }

    #[inline]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.pointer_pressed = false;
    }

    /// Convert a pixel position (origin top-left) to NDC (origin centre, +y up).
    pub fn pixel_to_ndc(x: f32, y: f32, viewport: (u32, u32)) -> Vec2 {
        let (w, h) = (viewport.0.max(1) as f32, viewport.1.max(1) as f32);
        Vec2::new(x / w * 2.0 - 1.0, -(y / h) * 2.0 + 1.0)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("W"), Some(Key::Forward));
        assert_eq!(Key::from_name(" "), Some(Key::Up));
        assert_eq!(Key::from_name("Shift"), Some(Key::Down));
        assert_eq!(Key::from_name("q"), None);
    }

    #[test]
    fn test_key_press_release() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        assert!(input.is_key_pressed(Key::Left));
        input.key_up(Key::Left);
        assert!(!input.is_key_pressed(Key::Left));
    }

    #[test]
    fn test_pixel_to_ndc() {
        let ndc = InputState::pixel_to_ndc(400.0, 300.0, (800, 600));
        assert!(ndc.length() < 1e-6, "centre pixel should map to origin, got {:?}", ndc);

        let corner = InputState::pixel_to_ndc(0.0, 0.0, (800, 600));
        assert_eq!(corner, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_pointer_uses_viewport() {
        let mut input = InputState::new();
        input.set_viewport(200, 100);
        input.set_pointer_pixels(200.0, 100.0);
        assert_eq!(input.pointer(), Vec2::new(1.0, -1.0));
    }
}

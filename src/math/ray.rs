//! Ray type and plane intersection

use crate::core::types::{Vec2, Vec3};

/// Rays closer to parallel than this are treated as missing a plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A ray defined by origin and direction
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray (direction should be normalized)
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get point along ray at parameter t
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray-plane intersection. Returns the ray parameter of the hit in front of the origin.
    pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Option<f32> {
        let denom = normal.dot(self.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (point - self.origin).dot(normal) / denom;
        (t >= 0.0).then_some(t)
    }

    /// Intersection with the ground plane `y = 0`, as `(x, z)`.
    pub fn intersect_ground(&self) -> Option<Vec2> {
        self.intersect_plane(Vec3::ZERO, Vec3::Y).map(|t| {
            let hit = self.at(t);
            Vec2::new(hit.x, hit.z)
        })
    }
}

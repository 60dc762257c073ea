//! Renderer-agnostic shape descriptions.
//!
//! A [`ShapeNode`] is a tree of primitive meshes with local transforms and flat
//! materials. Builders in this module's siblings produce them; render backends
//! turn each primitive into a mesh. Rotations are Euler XYZ in radians.

use serde::{Deserialize, Serialize};

use crate::core::types::Vec3;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Linear RGB color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0]);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    /// Convert a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self([
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        ])
    }

    /// Nearest `0xRRGGBB` value.
    pub fn to_hex(self) -> u32 {
        let c = |v: f32| ((v.clamp(0.0, 1.0) * 255.0).round() as u32) & 0xff;
        (c(self.0[0]) << 16) | (c(self.0[1]) << 8) | c(self.0[2])
    }

    /// Add `delta` to every channel, clamped to `[0, 1]`.
    pub fn shifted(self, delta: f32) -> Self {
        Self(self.0.map(|v| (v + delta).clamp(0.0, 1.0)))
    }

    /// Add `delta` to the green channel only, clamped to `[0, 1]`.
    pub fn shifted_green(self, delta: f32) -> Self {
        let [r, g, b] = self.0;
        Self([r, (g + delta).clamp(0.0, 1.0), b])
    }
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// Flat leaf/petal outlines, extruded by nothing (rendered double-sided).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeafOutline {
    /// Symmetric pointed petal or leaf.
    Petal,
    /// Rounded diamond used by ivy.
    Round,
    /// Asymmetric broad blade used on tall plants.
    Blade,
    /// Short limp blade used on wilted tall plants.
    Limp,
}

/// A single mesh primitive, centred on its local origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        open_ended: bool,
    },
    Sphere {
        radius: f32,
    },
    /// Upper half of a sphere (mushroom caps).
    Dome {
        radius: f32,
    },
    Dodecahedron {
        radius: f32,
    },
    Icosahedron {
        radius: f32,
        detail: u8,
    },
    Octahedron {
        radius: f32,
    },
    /// Flat disc in the local XY plane.
    Disc {
        radius: f32,
    },
    /// Flat rectangle in the local XY plane.
    Plane {
        width: f32,
        height: f32,
    },
    Cuboid {
        size: Vec3,
    },
    Leaf {
        outline: LeafOutline,
        width: f32,
        length: f32,
    },
    /// Dodecahedron whose vertices are displaced by `jitter` (one entry per vertex).
    Rock {
        radius: f32,
        jitter: Vec<Vec3>,
    },
}

// ---------------------------------------------------------------------------
// ShapeNode
// ---------------------------------------------------------------------------

/// One node of a shape tree: an optional mesh plus child nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeNode {
    pub primitive: Option<Primitive>,
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: Rgb,
    pub opacity: f32,
    pub double_sided: bool,
    pub children: Vec<ShapeNode>,
}

impl ShapeNode {
    /// Empty grouping node.
    pub fn group() -> Self {
        Self {
            primitive: None,
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            color: Rgb::WHITE,
            opacity: 1.0,
            double_sided: false,
            children: Vec::new(),
        }
    }

    /// Leaf node holding a single primitive.
    pub fn mesh(primitive: Primitive, color: Rgb) -> Self {
        Self {
            primitive: Some(primitive),
            color,
            ..Self::group()
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.translation = Vec3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vec3::new(x, y, z);
        self
    }

    pub fn uniform_scale(self, s: f32) -> Self {
        self.scaled(s, s, s)
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    pub fn with_child(mut self, child: ShapeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: ShapeNode) {
        self.children.push(child);
    }

    /// Visit this node and all descendants depth-first.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a ShapeNode)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// Number of nodes carrying a primitive.
    pub fn mesh_count(&self) -> usize {
        let mut n = 0;
        self.visit(&mut |node| {
            if node.primitive.is_some() {
                n += 1;
            }
        });
        n
    }

    /// Primitives of all mesh nodes, depth-first.
    pub fn primitives(&self) -> Vec<&Primitive> {
        let mut out = Vec::new();
        self.visit(&mut |node| {
            if let Some(p) = &node.primitive {
                out.push(p);
            }
        });
        out
    }

    /// Colors of all mesh nodes, depth-first.
    pub fn mesh_colors(&self) -> Vec<Rgb> {
        let mut out = Vec::new();
        self.visit(&mut |node| {
            if node.primitive.is_some() {
                out.push(node.color);
            }
        });
        out
    }

    /// Set opacity on every node in the tree.
    pub fn set_opacity_recursive(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
        for child in &mut self.children {
            child.set_opacity_recursive(opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        for hex in [0x228B22, 0xFFFFFF, 0x000000, 0x80F0FF] {
            assert_eq!(Rgb::from_hex(hex).to_hex(), hex, "hex {:06X} changed", hex);
        }
    }

    #[test]
    fn test_shift_clamps() {
        let c = Rgb::from_hex(0x00FF00).shifted(0.1);
        assert_eq!(c.0[1], 1.0);
        assert!((c.0[0] - 0.1).abs() < 1e-6);
        let g = Rgb::new(0.5, 0.05, 0.5).shifted_green(-0.1);
        assert_eq!(g.0, [0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_tree_queries() {
        let shape = ShapeNode::group()
            .with_child(ShapeNode::mesh(Primitive::Sphere { radius: 1.0 }, Rgb::WHITE))
            .with_child(
                ShapeNode::group()
                    .with_child(ShapeNode::mesh(Primitive::Disc { radius: 0.1 }, Rgb::from_hex(0xFF0000))),
            );
        assert_eq!(shape.mesh_count(), 2);
        assert_eq!(shape.mesh_colors()[1].to_hex(), 0xFF0000);
        assert!(matches!(shape.primitives()[0], Primitive::Sphere { .. }));
    }

    #[test]
    fn test_opacity_recursive() {
        let mut shape = ShapeNode::group().with_child(ShapeNode::mesh(Primitive::Sphere { radius: 1.0 }, Rgb::WHITE));
        shape.set_opacity_recursive(0.3);
        let mut all = true;
        shape.visit(&mut |n| all &= (n.opacity - 0.3).abs() < 1e-6);
        assert!(all, "every node should carry the new opacity");
    }

    #[test]
    fn test_serializes_to_json() {
        let shape = ShapeNode::mesh(Primitive::Leaf { outline: LeafOutline::Petal, width: 0.1, length: 0.3 }, Rgb::WHITE)
            .double_sided();
        let json = serde_json::to_string(&shape).expect("serialize");
        assert!(json.contains("Petal"), "json: {}", json);
    }
}

//! One revivable plant and its wilted → reviving → revived → grown lifecycle.

use serde::{Deserialize, Serialize};

use crate::core::types::Vec2;
use crate::generation::{PlantKind, ShapeNode};

/// Progress this close to 1 counts as complete, absorbing accumulation error
/// from repeated fixed steps.
const COMPLETE_EPSILON: f32 = 1e-4;

/// Stable handle into the plant registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlantId(pub u32);

/// Coarse lifecycle stage, derived from the progress fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlantStage {
    Wilted,
    /// Rain has started; both meshes crossfade.
    Reviving,
    /// Revived and still growing toward its maximum size.
    Growing,
    /// Revived and fully grown.
    Grown,
}

/// A plant placed at world-build time. Never destroyed; only its visible
/// representation changes.
#[derive(Clone, Debug)]
pub struct PlantEntity {
    id: PlantId,
    kind: PlantKind,
    position: Vec2,
    rotation_y: f32,
    scale: f32,
    max_growth_scale: f32,

    revived: bool,
    revived_progress: f32,
    growth_progress: f32,
    settled: bool,
    /// A cloud is currently raining on this plant.
    targeted: bool,

    wilted_shape: ShapeNode,
    revived_shape: Option<ShapeNode>,
}

impl PlantEntity {
    pub fn new(
        id: PlantId,
        kind: PlantKind,
        position: Vec2,
        rotation_y: f32,
        scale: f32,
        max_growth_scale: f32,
        wilted_shape: ShapeNode,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            rotation_y,
            scale,
            max_growth_scale,
            revived: false,
            revived_progress: 0.0,
            growth_progress: 0.0,
            settled: false,
            targeted: false,
            wilted_shape,
            revived_shape: None,
        }
    }

    #[inline]
    pub fn id(&self) -> PlantId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PlantKind {
        self.kind
    }

    /// Ground-plane position (x, z).
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Spawn scale of both forms before any growth.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn max_growth_scale(&self) -> f32 {
        self.max_growth_scale
    }

    #[inline]
    pub fn is_revived(&self) -> bool {
        self.revived
    }

    #[inline]
    pub fn revived_progress(&self) -> f32 {
        self.revived_progress
    }

    #[inline]
    pub fn growth_progress(&self) -> f32 {
        self.growth_progress
    }

    /// Whether the post-revival settle has run.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    #[inline]
    pub fn is_targeted(&self) -> bool {
        self.targeted
    }

    /// Claim or release the plant for a raining cloud. At most one cloud
    /// holds the claim at a time.
    #[inline]
    pub fn set_targeted(&mut self, targeted: bool) {
        self.targeted = targeted;
    }

    pub fn stage(&self) -> PlantStage {
        if !self.revived {
            if self.revived_progress > 0.0 {
                PlantStage::Reviving
            } else {
                PlantStage::Wilted
            }
        } else if self.growth_progress < 1.0 {
            PlantStage::Growing
        } else {
            PlantStage::Grown
        }
    }

    #[inline]
    pub fn wilted_shape(&self) -> &ShapeNode {
        &self.wilted_shape
    }

    #[inline]
    pub fn revived_shape(&self) -> Option<&ShapeNode> {
        self.revived_shape.as_ref()
    }

    /// Attach the revived form. The first shape wins; later calls are ignored.
    pub fn attach_revived_shape(&mut self, shape: ShapeNode) {
        if self.revived_shape.is_none() {
            self.revived_shape = Some(shape);
        }
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Apply one tick of rain. Returns `true` when progress has reached 1 and
    /// the plant is ready to be finalized. Revived plants ignore rain.
    pub fn add_rain(&mut self, step: f32) -> bool {
        if self.revived {
            return false;
        }
        if step.is_finite() && step > 0.0 {
            self.revived_progress = (self.revived_progress + step).min(1.0);
        }
        if self.revived_progress >= 1.0 - COMPLETE_EPSILON {
            self.revived_progress = 1.0;
        }
        self.revived_progress >= 1.0
    }

    /// Flip to revived and restart growth. Returns `false` if already revived.
    pub fn finalize_revival(&mut self) -> bool {
        if self.revived {
            return false;
        }
        self.revived = true;
        self.targeted = false;
        self.revived_progress = 1.0;
        self.growth_progress = 0.0;
        true
    }

    /// Hide the wilted form and snap the revived one to full opacity.
    pub fn settle(&mut self) {
        if self.revived {
            self.settled = true;
        }
    }

    /// Advance post-revival growth by `step`, saturating at 1.
    pub fn step_growth(&mut self, step: f32) {
        if self.revived && self.growth_progress < 1.0 && step > 0.0 {
            self.growth_progress = (self.growth_progress + step).min(1.0);
            if self.growth_progress >= 1.0 - COMPLETE_EPSILON {
                self.growth_progress = 1.0;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Presentation
    // -----------------------------------------------------------------------

    /// Scale of the revived form: lerp from `scale` to `scale * max_growth_scale`.
    pub fn current_scale(&self) -> f32 {
        let target = self.scale * self.max_growth_scale;
        self.scale + (target - self.scale) * self.growth_progress
    }

    #[inline]
    pub fn wilted_visible(&self) -> bool {
        !self.settled
    }

    #[inline]
    pub fn revived_visible(&self) -> bool {
        self.revived_shape.is_some() && (self.revived || self.revived_progress > 0.0)
    }

    pub fn wilted_opacity(&self) -> f32 {
        if self.settled { 0.0 } else { 1.0 - self.revived_progress }
    }

    pub fn revived_opacity(&self) -> f32 {
        if self.settled { 1.0 } else { self.revived_progress }
    }
}

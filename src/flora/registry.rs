//! Flat, append-only plant registry. Plant ids are indices, so a lookup is
//! always valid for the lifetime of the session.

use crate::core::types::Vec2;
use crate::generation::{PlantKind, ShapeNode};

use super::plant::{PlantEntity, PlantId};

#[derive(Clone, Debug, Default)]
pub struct PlantRegistry {
    plants: Vec<PlantEntity>,
}

impl PlantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plant and return its id.
    pub fn spawn(
        &mut self,
        kind: PlantKind,
        position: Vec2,
        rotation_y: f32,
        scale: f32,
        max_growth_scale: f32,
        wilted_shape: ShapeNode,
    ) -> PlantId {
        let id = PlantId(self.plants.len() as u32);
        self.plants.push(PlantEntity::new(id, kind, position, rotation_y, scale, max_growth_scale, wilted_shape));
        id
    }

    #[inline]
    pub fn get(&self, id: PlantId) -> Option<&PlantEntity> {
        self.plants.get(id.0 as usize)
    }

    #[inline]
    pub fn get_mut(&mut self, id: PlantId) -> Option<&mut PlantEntity> {
        self.plants.get_mut(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlantEntity> {
        self.plants.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlantEntity> {
        self.plants.iter_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn revived_count(&self) -> usize {
        self.plants.iter().filter(|p| p.is_revived()).count()
    }

    /// Nearest unrevived plant strictly closer than `radius` to `point` that
    /// no cloud is already raining on. Ties keep the lower id.
    pub fn nearest_unrevived_within(&self, point: Vec2, radius: f32) -> Option<PlantId> {
        let mut best: Option<(PlantId, f32)> = None;
        for plant in self.plants.iter().filter(|p| !p.is_revived() && !p.is_targeted()) {
            let d = plant.position().distance(point);
            if d < radius && best.is_none_or(|(_, bd)| d < bd) {
                best = Some((plant.id(), d));
            }
        }
        best.map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(points: &[(f32, f32)]) -> PlantRegistry {
        let mut reg = PlantRegistry::new();
        for &(x, z) in points {
            reg.spawn(PlantKind::Bush, Vec2::new(x, z), 0.0, 1.0, 1.0, ShapeNode::group());
        }
        reg
    }

    #[test]
    fn test_ids_are_indices() {
        let reg = registry(&[(0.0, 0.0), (5.0, 5.0)]);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(PlantId(1)).map(|p| p.position()), Some(Vec2::new(5.0, 5.0)));
        assert!(reg.get(PlantId(2)).is_none());
    }

    #[test]
    fn test_nearest_prefers_closest() {
        let reg = registry(&[(2.5, 0.0), (1.0, 0.0), (-1.0, 0.0)]);
        assert_eq!(reg.nearest_unrevived_within(Vec2::ZERO, 3.0), Some(PlantId(1)), "tie keeps the lower id");
        assert_eq!(reg.nearest_unrevived_within(Vec2::new(2.4, 0.0), 3.0), Some(PlantId(0)));
    }

    #[test]
    fn test_radius_is_strict() {
        let reg = registry(&[(3.0, 0.0)]);
        assert_eq!(reg.nearest_unrevived_within(Vec2::ZERO, 3.0), None);
        assert_eq!(reg.nearest_unrevived_within(Vec2::new(0.01, 0.0), 3.0), Some(PlantId(0)));
    }

    #[test]
    fn test_revived_plants_are_skipped() {
        let mut reg = registry(&[(0.5, 0.0), (2.0, 0.0)]);
        if let Some(p) = reg.get_mut(PlantId(0)) {
            p.add_rain(1.0);
            p.finalize_revival();
        }
        assert_eq!(reg.revived_count(), 1);
        assert_eq!(reg.nearest_unrevived_within(Vec2::ZERO, 3.0), Some(PlantId(1)));
    }

    #[test]
    fn test_targeted_plants_are_skipped() {
        let mut reg = registry(&[(0.5, 0.0), (2.0, 0.0)]);
        if let Some(p) = reg.get_mut(PlantId(0)) {
            p.set_targeted(true);
        }
        assert_eq!(reg.nearest_unrevived_within(Vec2::ZERO, 3.0), Some(PlantId(1)), "claimed plant is not offered");
        if let Some(p) = reg.get_mut(PlantId(0)) {
            p.set_targeted(false);
        }
        assert_eq!(reg.nearest_unrevived_within(Vec2::ZERO, 3.0), Some(PlantId(0)));
    }
}

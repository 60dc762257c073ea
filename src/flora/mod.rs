//! Revivable plants: per-plant lifecycle state and the registry that owns them.

pub mod config;
pub mod plant;
pub mod registry;

pub use config::PlantConfig;
pub use plant::{PlantEntity, PlantId, PlantStage};
pub use registry::PlantRegistry;

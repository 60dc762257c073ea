//! Startup world building: decorations and the initial plant registry.

pub mod config;
pub mod populator;

pub use config::PopulationConfig;
pub use populator::{Decoration, PopulatedWorld, WorldPopulator};

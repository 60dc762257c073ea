//! Cloud Wizard - a procedural garden where rain clouds revive wilted plants

pub mod core;
pub mod math;
pub mod atmosphere;
pub mod generation;
pub mod flora;
pub mod world;
pub mod cloud;
pub mod weather;
pub mod effects;
pub mod sim;

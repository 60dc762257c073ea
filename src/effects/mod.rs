//! Transient particle effects: revival bursts and rain splashes.

pub mod burst;
pub mod splash;

pub use burst::{BurstParticle, RevivalBurst};
pub use splash::RainSplash;

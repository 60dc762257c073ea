//! Transient weather: rainbows and lightning spawned after a cloud release.

pub mod config;
pub mod lightning;
pub mod rainbow;
pub mod roll;

pub use config::WeatherConfig;
pub use lightning::Lightning;
pub use rainbow::{Rainbow, RainbowBand};
pub use roll::{WeatherRoll, roll_weather};

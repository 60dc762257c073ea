//! Rain clouds: the per-cloud state machine and its rain shower.

pub mod config;
pub mod entity;
pub mod rain;

pub use config::CloudConfig;
pub use entity::{Cloud, CloudId, CloudState};
pub use rain::{RainDrop, RainShower};

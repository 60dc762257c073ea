//! Outbound notifications for audio, UI and logging hosts. Nothing requires a
//! consumer; undrained events are simply dropped on the next drain.

use serde::{Deserialize, Serialize};

use crate::cloud::CloudId;
use crate::core::types::Vec3;
use crate::flora::PlantId;

/// How long feedback messages stay on screen.
pub const FEEDBACK_SECONDS: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AudioCue {
    PlantGrowth,
    RainStarted,
    RainStopped,
    /// New ambient cross-fade targets.
    AmbientVolumes { day: f32, night: f32 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    Audio(AudioCue),
    /// Transient user-facing message.
    Feedback { message: String, duration: f32 },
    CloudFinalized { cloud: CloudId, position: Vec3 },
    PlantRevived { plant: PlantId, total_revived: u32 },
    CloudRemoved { cloud: CloudId },
    RainbowSpawned { start: Vec3, end: Vec3 },
    LightningSpawned { start: Vec3, end: Vec3 },
}

/// Read-only values for the on-screen counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub magic_power: u32,
    pub plants_revived: u32,
}

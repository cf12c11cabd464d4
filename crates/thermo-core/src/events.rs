//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A party launched its first nukes.
    NukesLaunched { party: String, count: u32 },
    /// A nuke hit a city.
    Detonation {
        city: String,
        country_code: String,
        /// Party owning the city.
        party: String,
        /// Fatalities caused by this strike alone.
        fatalities: u64,
    },
    /// Every nuke has reached its destination.
    Terminated { fatalities: u64 },
}

//! Commands sent by the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next step boundary.

use serde::{Deserialize, Serialize};

use crate::enums::{MapView, SimulationSpeed};

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Start the exchange (leaves WaitingToStart).
    Launch,
    Pause,
    Resume,
    /// Pause when running, resume when paused.
    TogglePause,
    /// Step to the next faster speed.
    Faster,
    /// Step to the next slower speed.
    Slower,
    SetSpeed { speed: SimulationSpeed },
    /// Change the map view used for snapshot projections.
    SetView { view: MapView },
}

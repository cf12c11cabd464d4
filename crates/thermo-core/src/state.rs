//! Simulation state snapshot: the visible state handed to the presentation layer each step.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::components::PartyId;
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{GeoCoord, SimClock};

/// Complete simulation state after one step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub clock: SimClock,
    pub phase: SimPhase,
    pub speed: SimulationSpeed,
    pub view: MapView,
    /// Launched nukes that have not detonated yet.
    pub nukes: Vec<NukeView>,
    pub detonations: Vec<DetonationView>,
    pub parties: Vec<PartyView>,
    /// Total fatalities across all parties.
    pub fatalities: u64,
    /// Events produced by this step.
    pub events: Vec<SimEvent>,
}

/// A nuke on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NukeView {
    /// Launching party.
    pub party: PartyId,
    pub origin: String,
    pub destination: String,
    pub position: GeoCoord,
    /// Position projected with the current map view.
    pub map_position: DVec2,
    pub leg: usize,
    pub legs: usize,
    pub phase: NukePhase,
}

/// A detonation on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetonationView {
    pub city: String,
    pub coord: GeoCoord,
    pub map_position: DVec2,
    /// Normalized fireball diameter (0.0 - 1.0).
    pub diameter: f64,
    /// Normalized light intensity (0.0 - 1.0).
    pub light_intensity: f64,
    pub phase: DetonationPhase,
}

/// Per-party statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyView {
    pub name: String,
    pub short_name: String,
    pub fatalities: u64,
    pub population: u64,
    /// fatalities / population, 0.0 for a party without population.
    pub kill_rate: f64,
    /// Detonations received on this party's cities.
    pub detonations_received: u32,
    /// Launched nukes still in the air.
    pub airborne: u32,
    /// Nukes not yet detonated.
    pub remaining: u32,
}

/// Final tally of an exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub parties: Vec<PartyView>,
    pub fatalities: u64,
}

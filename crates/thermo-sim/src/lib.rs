//! Simulation engine for THERMO.
//!
//! Assembles scenarios into a hecs ECS world, advances the exchange
//! step by step and produces SimSnapshots for the presentation layer.

pub mod detonation;
pub mod engine;
pub mod error;
pub mod nuke;
pub mod scenario;
pub mod scenario_maker;
pub mod systems;
pub mod world_setup;

pub use thermo_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use error::SimError;
pub use scenario::{Party, Scenario};
pub use scenario_maker::ScenarioMaker;

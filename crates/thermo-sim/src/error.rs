//! Simulation errors: scenario configuration errors and broken invariants.

use hecs::Entity;
use thiserror::Error;

use thermo_core::error::ModelError;
use thermo_geo::GeoError;

#[derive(Debug, Error)]
pub enum SimError {
    // --- Configuration ---
    #[error("insufficient number of parties: {0}")]
    TooFewParties(usize),
    #[error("party `{party}` declares unknown enemy `{enemy}`")]
    UnknownEnemy { party: String, enemy: String },
    #[error("party `{party}` has no enemy countries")]
    NoEnemies { party: String },
    #[error("party `{party}` references unknown country `{code}`")]
    UnknownCountry { party: String, code: String },
    #[error("party `{party}` has {warheads} warheads but no enemy cities")]
    NoEnemyCities { party: String, warheads: u32 },
    #[error("first strike index {index} out of range for {parties} parties")]
    FirstStrikeOutOfRange { index: usize, parties: usize },
    #[error(transparent)]
    Model(#[from] ModelError),

    // --- Invariants ---
    #[error("insufficient launch sites for `{party}`: capacity {capacity} vs {warheads} warheads")]
    InsufficientCapacity {
        party: String,
        capacity: u32,
        warheads: u32,
    },
    #[error("no launch site available for `{party}`")]
    NoLaunchSiteAvailable { party: String },
    #[error("city `{city}` [{country_code}] is outside the countries of party `{party}`")]
    CityOutsideParty {
        party: String,
        city: String,
        country_code: String,
    },
    #[error("cannot detonate nuke {0:?}: destination not reached")]
    NukeNotArrived(Entity),
    #[error("nuke {0:?} has already detonated")]
    NukeAlreadyDetonated(Entity),
    #[error("city `{0}` is not owned by any party")]
    TargetNotOwned(String),
    #[error("trajectory: {0}")]
    Trajectory(#[from] GeoError),
    #[error("entity lookup failed: {0}")]
    Component(#[from] hecs::ComponentError),
}

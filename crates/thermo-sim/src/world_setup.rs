//! Entity spawn factories for setting up a scenario world.
//!
//! Every spawned entity carries the `PartyId` of its owner.

use hecs::{Entity, World};

use thermo_core::components::{City, LaunchSite, PartyId};

use crate::detonation::Detonation;
use crate::nuke::Nuke;

/// Spawn a city with fresh casualty counters.
pub fn spawn_city(world: &mut World, city: &City, owner: PartyId) -> Entity {
    let fresh = City::new(
        city.name.clone(),
        city.coord,
        city.country_code.clone(),
        city.population,
    );
    world.spawn((fresh, owner))
}

/// Spawn a launch site. Capacity is assigned later, per party.
pub fn spawn_launch_site(world: &mut World, site: LaunchSite, owner: PartyId) -> Entity {
    world.spawn((site, owner))
}

/// Spawn a nuke owned by the launching party.
pub fn spawn_nuke(world: &mut World, nuke: Nuke, owner: PartyId) -> Entity {
    world.spawn((nuke, owner))
}

/// Spawn a detonation owned by the party that was hit.
pub fn spawn_detonation(world: &mut World, detonation: Detonation, owner: PartyId) -> Entity {
    world.spawn((detonation, owner))
}

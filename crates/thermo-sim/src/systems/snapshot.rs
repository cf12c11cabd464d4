//! Snapshot system: queries the scenario world and builds a complete SimSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use thermo_core::components::{City, LaunchSite, PartyId};
use thermo_core::enums::{MapView, SimPhase, SimulationSpeed};
use thermo_core::events::SimEvent;
use thermo_core::state::{DetonationView, NukeView, SimSnapshot};
use thermo_core::types::SimClock;
use thermo_geo::ScreenProjection;

use crate::detonation::Detonation;
use crate::nuke::Nuke;
use crate::scenario::Scenario;

/// Build a complete SimSnapshot from the current scenario state.
pub fn build_snapshot(
    scenario: &Scenario,
    clock: SimClock,
    phase: SimPhase,
    speed: SimulationSpeed,
    view: MapView,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    let projection = ScreenProjection::for_view(view);
    let world = scenario.world();

    SimSnapshot {
        clock,
        phase,
        speed,
        view,
        nukes: build_nukes(world, scenario, &projection),
        detonations: build_detonations(world, scenario, &projection),
        parties: scenario.party_views(),
        fatalities: scenario.fatalities(),
        events,
    }
}

fn city_name(world: &World, entity: hecs::Entity) -> String {
    world
        .get::<&City>(entity)
        .map(|c| c.name.clone())
        .unwrap_or_default()
}

fn site_name(world: &World, entity: hecs::Entity) -> String {
    world
        .get::<&LaunchSite>(entity)
        .map(|s| s.name.clone())
        .unwrap_or_default()
}

/// Launched nukes that have not detonated, in party order.
fn build_nukes(world: &World, scenario: &Scenario, projection: &ScreenProjection) -> Vec<NukeView> {
    scenario
        .all_nukes()
        .into_iter()
        .filter_map(|entity| {
            let nuke = world.get::<&Nuke>(entity).ok()?;
            if !nuke.is_launched() || nuke.is_detonated() {
                return None;
            }
            let party = world.get::<&PartyId>(entity).map(|p| *p).ok()?;
            let position = nuke.position();
            Some(NukeView {
                party,
                origin: site_name(world, nuke.origin),
                destination: city_name(world, nuke.destination),
                position,
                map_position: projection.to_screen(position),
                leg: nuke.leg(),
                legs: nuke.trajectory().len(),
                phase: nuke.phase(),
            })
        })
        .collect()
}

fn build_detonations(
    world: &World,
    scenario: &Scenario,
    projection: &ScreenProjection,
) -> Vec<DetonationView> {
    scenario
        .all_detonations()
        .into_iter()
        .filter_map(|entity| {
            let detonation = world.get::<&Detonation>(entity).ok()?;
            let city = world.get::<&City>(detonation.city).ok()?;
            Some(DetonationView {
                city: city.name.clone(),
                coord: city.coord,
                map_position: projection.to_screen(city.coord),
                diameter: detonation.diameter(),
                light_intensity: detonation.light_intensity(),
                phase: detonation.phase(),
            })
        })
        .collect()
}

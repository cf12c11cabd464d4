//! Flight system: gives launch orders and advances nukes along their trajectories.
//!
//! The first-strike party flies from the start. Every other party holds
//! its nukes until the simulation clock passes the retaliation delay.

use hecs::{Entity, World};

use thermo_core::components::PartyId;
use thermo_core::constants::RETALIATION_DELAY_SECS;
use thermo_core::events::SimEvent;

use crate::nuke::Nuke;
use crate::scenario::Party;

/// Whether `party` may launch at simulation time `clock`.
pub fn may_launch(party: PartyId, first_strike: PartyId, clock: f64) -> bool {
    clock > RETALIATION_DELAY_SECS || party == first_strike
}

/// Launch and advance the nukes of every party cleared to fly.
pub fn run(
    world: &mut World,
    parties: &[Party],
    first_strike: PartyId,
    clock: f64,
    scaled_delta: f64,
    events: &mut Vec<SimEvent>,
) {
    for party in parties {
        if !may_launch(party.id, first_strike, clock) {
            continue;
        }

        let mut launched = 0u32;
        for &entity in party.nukes() {
            let Ok(mut nuke) = world.get::<&mut Nuke>(entity) else {
                continue;
            };
            if nuke.is_detonated() {
                continue;
            }
            if !nuke.is_launched() {
                nuke.launch();
                launched += 1;
            }
            nuke.update(scaled_delta);
        }

        if launched > 0 {
            tracing::info!(
                target: "thermo::sim",
                party = %party.name,
                count = launched,
                clock,
                "sim.nukes_launched"
            );
            events.push(SimEvent::NukesLaunched {
                party: party.name.clone(),
                count: launched,
            });
        }
    }
}

/// Nukes that reached their destination and have not detonated yet, in party order.
pub fn arrived_nukes(world: &World, parties: &[Party]) -> Vec<Entity> {
    parties
        .iter()
        .flat_map(|party| party.nukes().iter().copied())
        .filter(|&entity| {
            world
                .get::<&Nuke>(entity)
                .map(|nuke| nuke.has_reached_destination() && !nuke.is_detonated())
                .unwrap_or(false)
        })
        .collect()
}

//! Detonation system: applies an arrived nuke to its destination city.
//!
//! `detonate_nuke` is the only place where a city takes a hit.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use thermo_core::components::City;

use crate::detonation::Detonation;
use crate::error::SimError;
use crate::nuke::Nuke;
use crate::systems::casualties;

/// Detonate `nuke` on its destination. Returns the city entity and the
/// fatalities added by the strike.
///
/// Fails if the nuke is still flying or has already detonated.
pub fn detonate_nuke(
    world: &mut World,
    nuke: Entity,
    rng: &mut ChaCha8Rng,
) -> Result<(Entity, u64), SimError> {
    let destination = {
        let n = world.get::<&Nuke>(nuke)?;
        if n.is_detonated() {
            return Err(SimError::NukeAlreadyDetonated(nuke));
        }
        if !n.has_reached_destination() {
            return Err(SimError::NukeNotArrived(nuke));
        }
        n.destination
    };

    let fatalities = {
        let mut city = world.get::<&mut City>(destination)?;
        casualties::hit(&mut city, rng)
    };
    world.get::<&mut Nuke>(nuke)?.mark_detonated();

    Ok((destination, fatalities))
}

/// Advance every detonation's animation clock by the unscaled delta.
pub fn update_clocks(world: &mut World, delta: f64) {
    for (_entity, detonation) in world.query_mut::<&mut Detonation>() {
        detonation.update(delta);
    }
}

//! Scenario: the parties of an exchange and the world they fight over.
//!
//! Cities, launch sites, nukes and detonations are hecs entities. A
//! `Party` keeps ordered entity lists of what it owns, and each entity
//! carries the `PartyId` of its canonical owner. Nukes reference their
//! origin site and destination city by entity.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use thermo_core::components::{City, Country, PartyId};
use thermo_core::enums::MapView;
use thermo_core::events::SimEvent;
use thermo_core::state::{Outcome, PartyView};

use crate::detonation::Detonation;
use crate::error::SimError;
use crate::nuke::Nuke;
use crate::systems;
use crate::world_setup;

/// One belligerent faction.
#[derive(Debug, Clone)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    pub short_name: String,
    countries: Vec<Country>,
    cities: Vec<Entity>,
    launch_sites: Vec<Entity>,
    nukes: Vec<Entity>,
    detonations: Vec<Entity>,
}

impl Party {
    /// Assemble a party. Every city must belong to one of its countries.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        world: &World,
        id: PartyId,
        name: impl Into<String>,
        short_name: impl Into<String>,
        countries: Vec<Country>,
        cities: Vec<Entity>,
        launch_sites: Vec<Entity>,
        nukes: Vec<Entity>,
    ) -> Result<Self, SimError> {
        let name = name.into();
        for &entity in &cities {
            let city = world.get::<&City>(entity)?;
            if !countries.iter().any(|c| c.country_code == city.country_code) {
                return Err(SimError::CityOutsideParty {
                    party: name,
                    city: city.name.clone(),
                    country_code: city.country_code.clone(),
                });
            }
        }

        Ok(Self {
            id,
            name,
            short_name: short_name.into(),
            countries,
            cities,
            launch_sites,
            nukes,
            detonations: Vec::new(),
        })
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn cities(&self) -> &[Entity] {
        &self.cities
    }

    pub fn launch_sites(&self) -> &[Entity] {
        &self.launch_sites
    }

    pub fn nukes(&self) -> &[Entity] {
        &self.nukes
    }

    /// Detonations received on this party's cities, oldest first.
    pub fn detonations(&self) -> &[Entity] {
        &self.detonations
    }

    fn city_sum(&self, world: &World, value: impl Fn(&City) -> u64) -> u64 {
        self.cities
            .iter()
            .filter_map(|&e| world.get::<&City>(e).ok().map(|c| value(&c)))
            .sum()
    }

    /// Total fatalities over the party's cities.
    pub fn fatalities(&self, world: &World) -> u64 {
        self.city_sum(world, |c| c.fatalities)
    }

    /// Total population over the party's cities.
    pub fn population(&self, world: &World) -> u64 {
        self.city_sum(world, |c| c.population)
    }

    fn count_nukes(&self, world: &World, pred: impl Fn(&Nuke) -> bool) -> u32 {
        self.nukes
            .iter()
            .filter(|&&e| world.get::<&Nuke>(e).map(|n| pred(&n)).unwrap_or(false))
            .count() as u32
    }

    /// Per-party statistics for display.
    pub fn view(&self, world: &World) -> PartyView {
        let fatalities = self.fatalities(world);
        let population = self.population(world);
        let kill_rate = if population > 0 {
            fatalities as f64 / population as f64
        } else {
            0.0
        };
        PartyView {
            name: self.name.clone(),
            short_name: self.short_name.clone(),
            fatalities,
            population,
            kill_rate,
            detonations_received: self.city_sum(world, |c| u64::from(c.hits)) as u32,
            airborne: self.count_nukes(world, Nuke::is_airborne),
            remaining: self.count_nukes(world, |n| !n.is_detonated()),
        }
    }
}

/// A fully assembled exchange, ready to be advanced.
pub struct Scenario {
    pub name: String,
    pub description: String,
    parties: Vec<Party>,
    first_strike: PartyId,
    initial_view: MapView,
    world: World,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parties: Vec<Party>,
        first_strike: PartyId,
        initial_view: MapView,
        world: World,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parties,
            first_strike,
            initial_view,
            world,
        }
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn party(&self, id: PartyId) -> Option<&Party> {
        self.parties.get(id.0)
    }

    pub fn first_strike(&self) -> PartyId {
        self.first_strike
    }

    pub fn initial_view(&self) -> MapView {
        self.initial_view
    }

    /// Read-only access to the entity world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Detonate an arrived nuke on its destination and record the blast
    /// with the party owning the city. Returns the detonation entity.
    pub fn detonate(&mut self, nuke: Entity, rng: &mut ChaCha8Rng) -> Result<Entity, SimError> {
        self.detonate_with_event(nuke, rng).map(|(entity, _)| entity)
    }

    fn detonate_with_event(
        &mut self,
        nuke: Entity,
        rng: &mut ChaCha8Rng,
    ) -> Result<(Entity, SimEvent), SimError> {
        let destination = self.world.get::<&Nuke>(nuke)?.destination;
        let owner = match self.world.get::<&PartyId>(destination) {
            Ok(id) => *id,
            Err(_) => {
                let city = self.world.get::<&City>(destination)?;
                return Err(SimError::TargetNotOwned(city.name.clone()));
            }
        };
        let party_index = owner.0;
        if party_index >= self.parties.len() {
            let city = self.world.get::<&City>(destination)?;
            return Err(SimError::TargetNotOwned(city.name.clone()));
        }

        let (city, fatalities) = systems::detonation::detonate_nuke(&mut self.world, nuke, rng)?;
        let detonation = world_setup::spawn_detonation(&mut self.world, Detonation::new(city), owner);
        let party = &mut self.parties[party_index];
        party.detonations.push(detonation);

        let (city_name, country_code) = {
            let c = self.world.get::<&City>(city)?;
            (c.name.clone(), c.country_code.clone())
        };
        tracing::info!(
            target: "thermo::sim",
            city = %city_name,
            party = %party.name,
            fatalities,
            "sim.detonation"
        );
        let event = SimEvent::Detonation {
            city: city_name,
            country_code,
            party: party.name.clone(),
            fatalities,
        };
        Ok((detonation, event))
    }

    /// One simulation step.
    ///
    /// `clock` is the simulation time including this step. Nukes fly by
    /// `delta * speed_factor`; detonation animations run on the unscaled delta.
    pub fn advance(
        &mut self,
        delta: f64,
        speed_factor: f64,
        clock: f64,
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<SimEvent>, SimError> {
        let mut events = Vec::new();

        systems::flight::run(
            &mut self.world,
            &self.parties,
            self.first_strike,
            clock,
            delta * speed_factor,
            &mut events,
        );

        for nuke in systems::flight::arrived_nukes(&self.world, &self.parties) {
            let (_, event) = self.detonate_with_event(nuke, rng)?;
            events.push(event);
        }

        systems::detonation::update_clocks(&mut self.world, delta);

        Ok(events)
    }

    /// Advance detonation animations only (used once the exchange is over).
    pub fn advance_detonations(&mut self, delta: f64) {
        systems::detonation::update_clocks(&mut self.world, delta);
    }

    // --- Queries ---

    /// Every nuke, party by party.
    pub fn all_nukes(&self) -> Vec<Entity> {
        self.parties
            .iter()
            .flat_map(|p| p.nukes.iter().copied())
            .collect()
    }

    fn nukes_where(&self, nukes: &[Entity], pred: impl Fn(&Nuke) -> bool) -> Vec<Entity> {
        nukes
            .iter()
            .copied()
            .filter(|&e| self.world.get::<&Nuke>(e).map(|n| pred(&n)).unwrap_or(false))
            .collect()
    }

    /// Launched nukes that have not reached their destination.
    pub fn all_airborne_nukes(&self) -> Vec<Entity> {
        self.nukes_where(&self.all_nukes(), Nuke::is_airborne)
    }

    /// Airborne nukes grouped by launching party, in party order.
    pub fn airborne_nukes_per_party(&self) -> Vec<(PartyId, Vec<Entity>)> {
        self.parties
            .iter()
            .map(|p| (p.id, self.nukes_where(&p.nukes, Nuke::is_airborne)))
            .collect()
    }

    /// Every detonation, party by party.
    pub fn all_detonations(&self) -> Vec<Entity> {
        self.parties
            .iter()
            .flat_map(|p| p.detonations.iter().copied())
            .collect()
    }

    /// Total fatalities over all parties.
    pub fn fatalities(&self) -> u64 {
        self.parties.iter().map(|p| p.fatalities(&self.world)).sum()
    }

    /// Every nuke has reached its destination.
    pub fn is_terminated(&self) -> bool {
        self.all_nukes().iter().all(|&e| {
            self.world
                .get::<&Nuke>(e)
                .map(|n| n.has_reached_destination())
                .unwrap_or(true)
        })
    }

    /// Every detonation animation has faded out.
    pub fn all_detonations_spent(&self) -> bool {
        self.all_detonations().iter().all(|&e| {
            self.world
                .get::<&Detonation>(e)
                .map(|d| d.is_spent())
                .unwrap_or(true)
        })
    }

    /// Per-party statistics.
    pub fn party_views(&self) -> Vec<PartyView> {
        self.parties.iter().map(|p| p.view(&self.world)).collect()
    }

    /// Final tally. Meaningful at any time, final once terminated.
    pub fn outcome(&self) -> Outcome {
        Outcome {
            parties: self.party_views(),
            fatalities: self.fatalities(),
        }
    }
}

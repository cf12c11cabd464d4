//! Scenario maker: turns scenario definitions into a populated world.
//!
//! For every party, enemy cities are ranked by population and each
//! warhead is assigned to the next city in line, launched from the
//! nearest launch site that still has capacity.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use thermo_core::components::{City, Country, LaunchSite, PartyId};
use thermo_core::constants::SUBMARINE_LAUNCH_CAPACITY;
use thermo_core::definitions::{LaunchSiteGroup, PartyDefinition, ScenarioDefinition, WorldData};
use thermo_core::enums::{LaunchSiteKind, MapView};
use thermo_core::types::GeoCoord;
use thermo_geo::haversine;

use crate::error::SimError;
use crate::nuke::Nuke;
use crate::scenario::{Party, Scenario};
use crate::world_setup;

/// Capacity given to every facility of a party with `warheads` warheads.
///
/// Facilities split the demand as if one of them were missing; submarine
/// capacity is not deducted.
pub fn facility_capacity(warheads: u32, facility_count: u32) -> u32 {
    warheads / facility_count.saturating_sub(1).max(1)
}

/// Append `floor(warheads / len)` extra copies of `targets` when there
/// are fewer targets than warheads.
pub fn multiply_targets<T: Clone>(targets: Vec<T>, warheads: u32) -> Vec<T> {
    let count = targets.len();
    if count == 0 || count >= warheads as usize {
        return targets;
    }
    let copies = warheads as usize / count;
    let mut out = Vec::with_capacity(count * (copies + 1));
    for _ in 0..=copies {
        out.extend(targets.iter().cloned());
    }
    out
}

/// Builds scenarios from reference data.
pub struct ScenarioMaker<'a> {
    cities: &'a [City],
    countries: &'a [Country],
    launch_sites: &'a [LaunchSiteGroup],
    strict_capacity: bool,
}

struct Target {
    entity: Entity,
    coord: GeoCoord,
}

impl<'a> ScenarioMaker<'a> {
    pub fn new(cities: &'a [City], countries: &'a [Country], launch_sites: &'a [LaunchSiteGroup]) -> Self {
        Self {
            cities,
            countries,
            launch_sites,
            strict_capacity: cfg!(debug_assertions),
        }
    }

    pub fn from_world(data: &'a WorldData) -> Self {
        Self::new(&data.cities, &data.countries, &data.launch_sites)
    }

    /// Check up front that a party's total launch capacity covers its warheads.
    pub fn strict_capacity(mut self, strict: bool) -> Self {
        self.strict_capacity = strict;
        self
    }

    /// Build every scenario, failing on the first invalid one.
    pub fn make_all(
        &self,
        definitions: &[ScenarioDefinition],
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<Scenario>, SimError> {
        definitions.iter().map(|d| self.make(d, rng)).collect()
    }

    /// Build one scenario.
    pub fn make(&self, definition: &ScenarioDefinition, rng: &mut ChaCha8Rng) -> Result<Scenario, SimError> {
        let defs = &definition.parties;
        if defs.len() < 2 {
            return Err(SimError::TooFewParties(defs.len()));
        }
        let initial_view = MapView::from_name(&definition.initial_map_view)?;

        let mut world = World::new();
        let city_entities = self.spawn_cities(&mut world, defs);
        let site_entities = self.spawn_launch_sites(&mut world, defs)?;

        let mut parties = Vec::with_capacity(defs.len());
        for (index, def) in defs.iter().enumerate() {
            let enemy_codes = enemy_country_codes(defs, index)?;
            let party = self.make_party(
                &mut world,
                PartyId(index),
                def,
                &enemy_codes,
                &city_entities,
                &site_entities,
                rng,
            )?;
            parties.push(party);
        }

        let first_strike = match definition.first_strike {
            Some(index) if index < parties.len() => index,
            Some(index) => {
                return Err(SimError::FirstStrikeOutOfRange {
                    index,
                    parties: parties.len(),
                })
            }
            None => rng.gen_range(0..parties.len()),
        };

        tracing::info!(
            target: "thermo::scenario",
            scenario = %definition.title,
            parties = parties.len(),
            first_strike = %parties[first_strike].name,
            "scenario.created"
        );

        Ok(Scenario::new(
            definition.title.clone(),
            definition.description.clone(),
            parties,
            PartyId(first_strike),
            initial_view,
            world,
        ))
    }

    /// Spawn every city belonging to a party. The first party listing a
    /// country owns its cities. Indices follow `self.cities`.
    fn spawn_cities(&self, world: &mut World, defs: &[PartyDefinition]) -> Vec<Option<Entity>> {
        self.cities
            .iter()
            .map(|city| {
                owning_party(defs, &city.country_code)
                    .map(|owner| world_setup::spawn_city(world, city, owner))
            })
            .collect()
    }

    /// Spawn every launch site of a party country, in declaration order.
    fn spawn_launch_sites(
        &self,
        world: &mut World,
        defs: &[PartyDefinition],
    ) -> Result<Vec<Entity>, SimError> {
        let mut entities = Vec::new();
        for group in self.launch_sites {
            let Some(owner) = owning_party(defs, &group.country) else {
                continue;
            };
            for entry in &group.sites {
                let kind: LaunchSiteKind = entry.kind.parse()?;
                let site = LaunchSite::new(entry.name.clone(), group.country.clone(), entry.coord, kind)?;
                entities.push(world_setup::spawn_launch_site(world, site, owner));
            }
        }
        Ok(entities)
    }

    #[allow(clippy::too_many_arguments)]
    fn make_party(
        &self,
        world: &mut World,
        id: PartyId,
        def: &PartyDefinition,
        enemy_codes: &[&str],
        city_entities: &[Option<Entity>],
        site_entities: &[Entity],
        rng: &mut ChaCha8Rng,
    ) -> Result<Party, SimError> {
        let countries = def
            .country_codes
            .iter()
            .map(|code| {
                self.countries
                    .iter()
                    .find(|c| &c.country_code == code)
                    .cloned()
                    .ok_or_else(|| SimError::UnknownCountry {
                        party: def.name.clone(),
                        code: code.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let own_cities: Vec<Entity> = self
            .cities
            .iter()
            .zip(city_entities)
            .filter(|(city, _)| def.country_codes.contains(&city.country_code))
            .filter_map(|(_, entity)| *entity)
            .collect();

        // Stable sort keeps declaration order among equal populations.
        let mut enemy_cities: Vec<(&City, Entity)> = self
            .cities
            .iter()
            .zip(city_entities)
            .filter(|(city, _)| enemy_codes.contains(&city.country_code.as_str()))
            .filter_map(|(city, entity)| (*entity).map(|e| (city, e)))
            .collect();
        enemy_cities.sort_by(|a, b| b.0.population.cmp(&a.0.population));

        if enemy_cities.is_empty() && def.warheads > 0 {
            return Err(SimError::NoEnemyCities {
                party: def.name.clone(),
                warheads: def.warheads,
            });
        }
        let targets = multiply_targets(
            enemy_cities
                .iter()
                .map(|(city, entity)| Target {
                    entity: *entity,
                    coord: city.coord,
                })
                .collect::<Vec<_>>(),
            def.warheads,
        );

        let launch_sites = self.party_launch_sites(world, def, site_entities)?;
        assign_capacities(world, &launch_sites, def.warheads)?;

        if self.strict_capacity {
            let capacity: u32 = launch_sites
                .iter()
                .map(|&e| world.get::<&LaunchSite>(e).map(|s| s.remaining_capacity).unwrap_or(0))
                .sum();
            if capacity < def.warheads {
                return Err(SimError::InsufficientCapacity {
                    party: def.name.clone(),
                    capacity,
                    warheads: def.warheads,
                });
            }
        }

        let mut nukes = Vec::with_capacity(def.warheads as usize);
        for target in targets.iter().take(def.warheads as usize) {
            let (site, site_coord) = nearest_available_site(world, &launch_sites, target.coord)?
                .ok_or_else(|| SimError::NoLaunchSiteAvailable {
                    party: def.name.clone(),
                })?;
            world.get::<&mut LaunchSite>(site)?.decrement_capacity();
            tracing::debug!(
                target: "thermo::scenario",
                party = %def.name,
                site = ?site,
                city = ?target.entity,
                "scenario.warhead_assigned"
            );
            let nuke = Nuke::new(site, site_coord, target.entity, target.coord, rng)?;
            nukes.push(world_setup::spawn_nuke(world, nuke, id));
        }

        tracing::info!(
            target: "thermo::scenario",
            party = %def.name,
            cities = own_cities.len(),
            enemy_cities = enemy_cities.len(),
            launch_sites = launch_sites.len(),
            nukes = nukes.len(),
            "scenario.party_created"
        );

        Party::new(
            world,
            id,
            def.name.clone(),
            def.short_name(),
            countries,
            own_cities,
            launch_sites,
            nukes,
        )
    }

    /// Sites in the party's countries, narrowed to the named ones when
    /// the definition lists any.
    fn party_launch_sites(
        &self,
        world: &World,
        def: &PartyDefinition,
        site_entities: &[Entity],
    ) -> Result<Vec<Entity>, SimError> {
        let mut sites = Vec::new();
        for &entity in site_entities {
            let site = world.get::<&LaunchSite>(entity)?;
            if !def.country_codes.contains(&site.country_code) {
                continue;
            }
            if !def.launch_sites.is_empty() && !def.launch_sites.contains(&site.name) {
                continue;
            }
            sites.push(entity);
        }
        Ok(sites)
    }
}

/// First party listing `country_code` among its countries.
fn owning_party(defs: &[PartyDefinition], country_code: &str) -> Option<PartyId> {
    defs.iter()
        .position(|d| d.country_codes.iter().any(|c| c == country_code))
        .map(PartyId)
}

/// Country codes of the parties named as enemies by `defs[index]`.
fn enemy_country_codes(defs: &[PartyDefinition], index: usize) -> Result<Vec<&str>, SimError> {
    let def = &defs[index];
    let mut codes = Vec::new();
    for enemy in &def.enemies {
        let found = defs
            .iter()
            .enumerate()
            .find(|(i, other)| *i != index && &other.name == enemy)
            .map(|(_, other)| other)
            .ok_or_else(|| SimError::UnknownEnemy {
                party: def.name.clone(),
                enemy: enemy.clone(),
            })?;
        codes.extend(found.country_codes.iter().map(String::as_str));
    }
    if codes.is_empty() {
        return Err(SimError::NoEnemies {
            party: def.name.clone(),
        });
    }
    Ok(codes)
}

/// Submarines get a fixed capacity, facilities share the warheads and
/// mobile sites get nothing.
fn assign_capacities(world: &mut World, sites: &[Entity], warheads: u32) -> Result<(), SimError> {
    let mut facilities = 0u32;
    for &entity in sites {
        if world.get::<&LaunchSite>(entity)?.kind == LaunchSiteKind::Facility {
            facilities += 1;
        }
    }
    let per_facility = facility_capacity(warheads, facilities);

    for &entity in sites {
        let mut site = world.get::<&mut LaunchSite>(entity)?;
        site.remaining_capacity = match site.kind {
            LaunchSiteKind::Submarine => SUBMARINE_LAUNCH_CAPACITY,
            LaunchSiteKind::Facility => per_facility,
            LaunchSiteKind::Mobile => 0,
        };
    }
    Ok(())
}

/// Non-empty site closest to `target`. Ties go to the earliest site.
fn nearest_available_site(
    world: &World,
    sites: &[Entity],
    target: GeoCoord,
) -> Result<Option<(Entity, GeoCoord)>, SimError> {
    let mut best: Option<(Entity, GeoCoord, f64)> = None;
    for &entity in sites {
        let site = world.get::<&LaunchSite>(entity)?;
        if site.is_empty() {
            continue;
        }
        let distance = haversine(site.coord, target);
        if best.map_or(true, |(_, _, d)| distance < d) {
            best = Some((entity, site.coord, distance));
        }
    }
    Ok(best.map(|(entity, coord, _)| (entity, coord)))
}

//! ECS components and reference entities.
//!
//! Components are plain data. The methods here are accessors and
//! validated constructors only; simulation logic lives in systems.

use serde::{Deserialize, Serialize};

use crate::enums::LaunchSiteKind;
use crate::error::ModelError;
use crate::types::GeoCoord;

/// A populated place that can be targeted.
/// Identity is (name, country code).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub name: String,
    pub coord: GeoCoord,
    /// ISO 3166-1 alpha-2 code of the owning country.
    pub country_code: String,
    pub population: u64,
    /// Cumulative fatalities. Not clamped to `population`.
    #[serde(default)]
    pub fatalities: u64,
    /// Number of detonations received.
    #[serde(default)]
    pub hits: u32,
}

impl City {
    pub fn new(
        name: impl Into<String>,
        coord: GeoCoord,
        country_code: impl Into<String>,
        population: u64,
    ) -> Self {
        Self {
            name: name.into(),
            coord,
            country_code: country_code.into(),
            population,
            fatalities: 0,
            hits: 0,
        }
    }

    /// Current survivors. Saturates at zero.
    pub fn survivors(&self) -> u64 {
        self.population.saturating_sub(self.fatalities)
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.country_code == other.country_code
    }
}

/// A closed ring of WGS84 points, used for display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<GeoCoord>,
}

impl Polygon {
    pub fn count(&self) -> usize {
        self.points.len()
    }
}

/// A country. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    pub country_code: String,
    pub population: u64,
    #[serde(default)]
    pub polygons: Vec<Polygon>,
    pub label_position: GeoCoord,
}

/// A nuclear missile launch site: a submarine, a mobile launcher or a
/// facility (several silos grouped as one).
/// Identity is (name, country code, coordinate).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSite {
    pub name: String,
    pub country_code: String,
    pub coord: GeoCoord,
    pub kind: LaunchSiteKind,
    /// Warheads this site can still launch.
    pub remaining_capacity: u32,
}

impl LaunchSite {
    /// Create a site with no capacity. Fails on a country code that is not 2 characters.
    pub fn new(
        name: impl Into<String>,
        country_code: impl Into<String>,
        coord: GeoCoord,
        kind: LaunchSiteKind,
    ) -> Result<Self, ModelError> {
        let country_code = country_code.into();
        if country_code.chars().count() != 2 {
            return Err(ModelError::InvalidCountryCode(country_code));
        }
        Ok(Self {
            name: name.into(),
            country_code,
            coord,
            kind,
            remaining_capacity: 0,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.remaining_capacity == 0
    }

    pub fn decrement_capacity(&mut self) {
        debug_assert!(self.remaining_capacity > 0, "decrement on empty site {}", self.name);
        self.remaining_capacity = self.remaining_capacity.saturating_sub(1);
    }
}

impl PartialEq for LaunchSite {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.country_code == other.country_code
            && self.coord == other.coord
    }
}

/// Marks the party an entity belongs to (index into the scenario's parties).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartyId(pub usize);

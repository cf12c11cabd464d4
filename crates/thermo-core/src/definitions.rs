//! Already-parsed reference data consumed by the scenario maker.
//!
//! How these records are produced (CSV, GeoJSON, ...) is up to the caller;
//! they derive `Deserialize` so a JSON bundle can be loaded directly.

use serde::{Deserialize, Serialize};

use crate::components::{City, Country};
use crate::types::GeoCoord;

/// One launch site as declared in the reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSiteEntry {
    pub name: String,
    pub coord: GeoCoord,
    /// `facility`, `submarine` or `mobile`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Launch sites grouped by country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSiteGroup {
    /// Country code shared by every site of the group.
    pub country: String,
    pub sites: Vec<LaunchSiteEntry>,
}

/// One belligerent as declared by a scenario.
///
/// Each party needs the other parties' data (their countries) to find
/// its targets, so parties are kept as plain definitions until every
/// one of them has been read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDefinition {
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    pub country_codes: Vec<String>,
    /// Names of the enemy parties.
    pub enemies: Vec<String>,
    pub warheads: u32,
    /// Restricts the party to these launch sites when not empty.
    #[serde(default)]
    pub launch_sites: Vec<String>,
}

impl PartyDefinition {
    /// Short name, falling back to the full name.
    pub fn short_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }
}

/// A scenario as declared in the reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDefinition {
    #[serde(rename = "short")]
    pub title: String,
    pub description: String,
    pub parties: Vec<PartyDefinition>,
    /// Index of the first-strike party; random when absent.
    #[serde(default)]
    pub first_strike: Option<usize>,
    /// Map view preset name, e.g. `EUROPE`.
    pub initial_map_view: String,
}

/// Complete reference data bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldData {
    pub cities: Vec<City>,
    pub countries: Vec<Country>,
    pub launch_sites: Vec<LaunchSiteGroup>,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDefinition>,
}

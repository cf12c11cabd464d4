//! Enumeration types used throughout the simulation.

use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Kind of launch site.
/// A facility groups several silos as one site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchSiteKind {
    Facility,
    Submarine,
    Mobile,
}

impl FromStr for LaunchSiteKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facility" => Ok(LaunchSiteKind::Facility),
            "submarine" => Ok(LaunchSiteKind::Submarine),
            "mobile" => Ok(LaunchSiteKind::Mobile),
            other => Err(ModelError::UnknownSiteKind(other.to_string())),
        }
    }
}

/// Nuke lifecycle phase, derived from the nuke's flags and leg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NukePhase {
    /// Assigned but not yet launched.
    #[default]
    PreLaunch,
    /// Launched; counting down the launch delay or flying.
    InFlight,
    /// Final leg reached, waiting for the detonation step.
    Arrived,
    /// Hit applied. Terminal.
    Detonated,
}

/// Detonation animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetonationPhase {
    Growth,
    Peak,
    Decay,
    /// Fully faded out.
    Spent,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    WaitingToStart,
    Running,
    Paused,
    /// Every nuke has reached its destination.
    Terminated,
}

/// Discrete simulation speed multipliers, slowest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SimulationSpeed {
    #[default]
    RealTime,
    Fast,
    Faster,
    LightningFast,
}

impl SimulationSpeed {
    pub const ALL: [SimulationSpeed; 4] = [
        SimulationSpeed::RealTime,
        SimulationSpeed::Fast,
        SimulationSpeed::Faster,
        SimulationSpeed::LightningFast,
    ];

    /// Multiplier applied to wall-clock deltas.
    pub fn speed_factor(self) -> f64 {
        match self {
            SimulationSpeed::RealTime => 1.0,
            SimulationSpeed::Fast => 25.0,
            SimulationSpeed::Faster => 100.0,
            SimulationSpeed::LightningFast => 400.0,
        }
    }

    /// Next faster speed; stays at the fastest.
    pub fn faster(self) -> Self {
        let idx = (self.index() + 1).min(Self::ALL.len() - 1);
        Self::ALL[idx]
    }

    /// Next slower speed; stays at the slowest.
    pub fn slower(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for SimulationSpeed {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "realtime" => Ok(SimulationSpeed::RealTime),
            "fast" => Ok(SimulationSpeed::Fast),
            "faster" => Ok(SimulationSpeed::Faster),
            "lightningfast" => Ok(SimulationSpeed::LightningFast),
            _ => Err(ModelError::UnknownSpeed(s.to_string())),
        }
    }
}

/// Map view presets used as a scenario's initial view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapView {
    #[default]
    World,
    Europe,
    Russia,
    NorthAmerica,
    China,
}

/// Display parameters of a map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewParams {
    /// Offset added to the normalized projection.
    pub offset: DVec2,
    /// Zoom around the world centre.
    pub zoom_factor: f64,
    /// Side of a city marker.
    pub city_square_size: f64,
    /// Cities below this population are not drawn.
    pub city_population_min: u64,
    /// Cities at or above this population are drawn large.
    pub city_population_large: u64,
    /// Countries at or above this population get a large label.
    pub country_population_large: u64,
    /// Scale applied to detonation diameters.
    pub detonation_factor: f64,
}

impl MapView {
    pub const ALL: [MapView; 5] = [
        MapView::World,
        MapView::Europe,
        MapView::Russia,
        MapView::NorthAmerica,
        MapView::China,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MapView::World => "WORLD",
            MapView::Europe => "EUROPE",
            MapView::Russia => "RUSSIA",
            MapView::NorthAmerica => "NORTH_AMERICA",
            MapView::China => "CHINA",
        }
    }

    /// Case-insensitive lookup by preset name.
    pub fn from_name(name: &str) -> Result<Self, ModelError> {
        Self::ALL
            .into_iter()
            .find(|view| view.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ModelError::UnknownMapView(name.to_string()))
    }

    /// China has many very large cities and needs higher thresholds.
    pub fn params(self) -> MapViewParams {
        match self {
            MapView::World => MapViewParams {
                offset: DVec2::new(0.0, -0.15),
                zoom_factor: 1.0,
                city_square_size: 0.002,
                city_population_min: 10_000_000,
                city_population_large: 10_000_000,
                country_population_large: 50_000_000,
                detonation_factor: 0.5,
            },
            MapView::Europe => MapViewParams {
                offset: DVec2::new(0.065, -0.18),
                zoom_factor: 6.5,
                city_square_size: 0.003,
                city_population_min: 500_000,
                city_population_large: 1_000_000,
                country_population_large: 3_000_000,
                detonation_factor: 1.0,
            },
            MapView::Russia => MapViewParams {
                offset: DVec2::new(-0.12, -0.22),
                zoom_factor: 3.10,
                city_square_size: 0.003,
                city_population_min: 500_000,
                city_population_large: 2_000_000,
                country_population_large: 3_000_000,
                detonation_factor: 0.8,
            },
            MapView::NorthAmerica => MapViewParams {
                offset: DVec2::new(0.425, -0.18),
                zoom_factor: 3.0,
                city_square_size: 0.002,
                city_population_min: 500_000,
                city_population_large: 2_000_000,
                country_population_large: 5_000_000,
                detonation_factor: 0.8,
            },
            MapView::China => MapViewParams {
                offset: DVec2::new(-0.18, -0.12),
                zoom_factor: 6.0,
                city_square_size: 0.002,
                city_population_min: 1_000_000,
                city_population_large: 10_000_000,
                country_population_large: 2_000_000,
                detonation_factor: 1.0,
            },
        }
    }
}

//! Fundamental geographic and simulation types.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in degrees.
/// `lon` is the x axis (East positive), `lat` the y axis (North positive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoord {
    pub lon: f64,
    pub lat: f64,
}

/// Simulation clock tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Number of steps advanced while running.
    pub step: u64,
    /// Elapsed simulated seconds (speed-scaled).
    pub elapsed_secs: f64,
}

impl GeoCoord {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Longitude in radians.
    pub fn lon_rad(&self) -> f64 {
        self.lon.to_radians()
    }

    /// Latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }
}

impl SimClock {
    /// Advance by one step of `scaled_delta` simulated seconds.
    pub fn advance(&mut self, scaled_delta: f64) {
        self.step += 1;
        self.elapsed_secs += scaled_delta;
    }
}

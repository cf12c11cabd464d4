//! Geodesy for THERMO.
//!
//! Mercator projection, great-circle distance, great-circle waypoint
//! interpolation and map-view screen projection.

pub use thermo_core as core;

pub mod projection;
pub mod trajectory;
pub mod wgs84;

#[cfg(test)]
mod proptest_geodesy;

use thiserror::Error;

// Re-export key types for convenience.
pub use projection::ScreenProjection;
pub use trajectory::{equidistant_points, haversine};
pub use wgs84::project;

/// Degenerate great-circle input.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeoError {
    /// The endpoints coincide; no great circle is defined between them.
    #[error("coincident endpoints at ({lon}, {lat})")]
    CoincidentEndpoints { lon: f64, lat: f64 },
    /// The endpoints are antipodal; infinitely many great circles join them.
    #[error("antipodal endpoints: angular distance {distance} rad")]
    AntipodalEndpoints { distance: f64 },
}

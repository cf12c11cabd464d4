//! WGS84 to normalized Mercator conversion.

use std::f64::consts::{FRAC_PI_4, TAU};

use glam::DVec2;

use thermo_core::constants::MERCATOR_LAT_LIMIT;
use thermo_core::types::GeoCoord;

/// Longitude (degrees) to normalized Mercator x in `[0, 1]`.
pub fn lon_to_mercator(lon: f64) -> f64 {
    (lon + 180.0) / 360.0
}

/// Latitude (degrees) to normalized Mercator y in `[0, 1]`, 0.5 at the equator.
/// At or beyond ±85° the value clamps to the pole (0 south, 1 north).
pub fn lat_to_mercator(lat: f64) -> f64 {
    if lat >= MERCATOR_LAT_LIMIT {
        return 1.0;
    }
    if lat <= -MERCATOR_LAT_LIMIT {
        return 0.0;
    }
    let y = 0.5 - (FRAC_PI_4 + (-lat).to_radians() / 2.0).tan().ln() / TAU;
    debug_assert!((0.0..=1.0).contains(&y), "lat {lat} -> {y}");
    y
}

/// Project a coordinate onto the normalized `[0,1] x [0,1]` map.
pub fn project(coord: GeoCoord) -> DVec2 {
    DVec2::new(lon_to_mercator(coord.lon), lat_to_mercator(coord.lat))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_latitudes() {
        let cases = [
            (-90.0, 0.0),
            (-89.0, 0.0),
            (-85.0, 0.0),
            (-84.99, 0.001_956_379_5),
            (-80.0, 0.112_259_395_4),
            (-60.0, 0.290_399_640_8),
            (-45.0, 0.359_725_058_1),
            (0.0, 0.5),
            (45.0, 0.640_274_941_9),
            (90.0, 1.0),
        ];
        for (lat, expected) in cases {
            let p = project(GeoCoord::new(0.0, lat));
            assert_close(p.x, 0.5);
            assert_close(p.y, expected);
        }
    }

    #[test]
    fn test_longitude_is_linear() {
        assert_eq!(lon_to_mercator(-180.0), 0.0);
        assert_eq!(lon_to_mercator(0.0), 0.5);
        assert_eq!(lon_to_mercator(180.0), 1.0);
        assert_close(lon_to_mercator(90.0), 0.75);
    }

    #[test]
    fn test_pole_clamp_is_exact() {
        assert_eq!(lat_to_mercator(85.0), 1.0);
        assert_eq!(lat_to_mercator(123.0), 1.0);
        assert_eq!(lat_to_mercator(-85.0), 0.0);
        assert_eq!(lat_to_mercator(-400.0), 0.0);
    }
}

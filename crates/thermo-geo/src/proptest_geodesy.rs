//! Property-based tests for the geodesy functions using proptest.

use proptest::prelude::*;

use thermo_core::types::GeoCoord;

use crate::trajectory::{equidistant_points, haversine};
use crate::wgs84::{lat_to_mercator, project};

fn coord() -> impl Strategy<Value = GeoCoord> {
    (-180.0f64..180.0, -89.0f64..89.0).prop_map(|(lon, lat)| GeoCoord::new(lon, lat))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Latitudes inside the clamp band always land inside the unit square.
    #[test]
    fn prop_projection_in_unit_square(lon in -180.0f64..=180.0, lat in -84.999f64..84.999) {
        let p = project(GeoCoord::new(lon, lat));
        prop_assert!((0.0..=1.0).contains(&p.x), "x = {}", p.x);
        prop_assert!((0.0..=1.0).contains(&p.y), "y = {}", p.y);
    }

    /// Mercator y grows with latitude.
    #[test]
    fn prop_mercator_monotonic(a in -84.9f64..84.9, b in -84.9f64..84.9) {
        prop_assume!(a < b);
        prop_assert!(lat_to_mercator(a) < lat_to_mercator(b));
    }

    #[test]
    fn prop_haversine_symmetric(a in coord(), b in coord()) {
        let ab = haversine(a, b);
        let ba = haversine(b, a);
        prop_assert!((ab - ba).abs() < 1e-12, "{} vs {}", ab, ba);
        prop_assert!(ab >= 0.0 && ab <= std::f64::consts::PI + 1e-12);
    }

    /// Waypoints progress monotonically from `a` to `b`, strictly between them,
    /// each at its fraction of the total distance.
    #[test]
    fn prop_waypoints_progress_along_great_circle(a in coord(), b in coord(), n in 0usize..40) {
        let total = haversine(a, b);
        prop_assume!(total > 1e-3 && total < std::f64::consts::PI - 1e-3);

        let points = equidistant_points(a, b, n).unwrap();
        prop_assert_eq!(points.len(), n);

        let mut previous = 0.0;
        for (i, p) in points.iter().enumerate() {
            let from_a = haversine(a, *p);
            let to_b = haversine(*p, b);
            let f = (i + 1) as f64 / (n + 1) as f64;
            prop_assert!(from_a > previous, "point {} does not progress", i);
            prop_assert!(from_a < total && to_b < total);
            prop_assert!((from_a - f * total).abs() < 1e-6, "point {} off fraction", i);
            prop_assert!((from_a + to_b - total).abs() < 1e-6, "point {} off great circle", i);
            previous = from_a;
        }
    }
}

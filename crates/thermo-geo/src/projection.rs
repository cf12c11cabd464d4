//! Screen projection: converts WGS84 coordinates to map-view space.
//!
//! The normalized Mercator projection is shifted by the view offset,
//! then scaled by the view zoom around the world centre.

use glam::DVec2;

use thermo_core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use thermo_core::enums::MapView;
use thermo_core::types::GeoCoord;

use crate::wgs84::project;

/// Centre of the map-space world.
const WORLD_CENTER: DVec2 = DVec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);

/// Projection for one map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenProjection {
    /// Offset added to the normalized projection.
    pub offset: DVec2,
    /// Scale applied around the world centre.
    pub zoom: f64,
}

impl ScreenProjection {
    pub fn new(offset: DVec2, zoom: f64) -> Self {
        Self { offset, zoom }
    }

    /// Projection matching a map view preset.
    pub fn for_view(view: MapView) -> Self {
        let params = view.params();
        Self::new(params.offset, WORLD_HEIGHT * params.zoom_factor)
    }

    /// Convert a coordinate to map-view space.
    pub fn to_screen(&self, coord: GeoCoord) -> DVec2 {
        let shifted = project(coord) + self.offset;
        (shifted - WORLD_CENTER) * self.zoom + WORLD_CENTER
    }

    /// Convert a polyline (e.g. a country outline or a trajectory).
    pub fn polyline_to_screen(&self, coords: &[GeoCoord]) -> Vec<DVec2> {
        coords.iter().map(|c| self.to_screen(*c)).collect()
    }
}

impl From<MapView> for ScreenProjection {
    fn from(view: MapView) -> Self {
        Self::for_view(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_projection_matches_mercator() {
        let proj = ScreenProjection::new(DVec2::ZERO, 1.0);
        let coord = GeoCoord::new(45.0, 30.0);
        let screen = proj.to_screen(coord);
        let merc = project(coord);
        assert!((screen - merc).length() < 1e-12);
    }

    #[test]
    fn test_world_center_is_fixed_point_of_zoom() {
        // A point projecting onto the world centre must not move when zooming.
        let proj = ScreenProjection::new(DVec2::ZERO, 6.5);
        let lon = WORLD_CENTER.x * 360.0 - 180.0;
        let screen = proj.to_screen(GeoCoord::new(lon, 0.0));
        assert!((screen - WORLD_CENTER).length() < 1e-9, "{screen}");
    }

    #[test]
    fn test_zoom_scales_distances() {
        let unit = ScreenProjection::new(DVec2::ZERO, 1.0);
        let zoomed = ScreenProjection::new(DVec2::ZERO, 3.0);
        let a = GeoCoord::new(0.0, 0.0);
        let b = GeoCoord::new(10.0, 0.0);
        let d1 = (unit.to_screen(b) - unit.to_screen(a)).length();
        let d3 = (zoomed.to_screen(b) - zoomed.to_screen(a)).length();
        assert!((d3 - 3.0 * d1).abs() < 1e-12);
    }

    #[test]
    fn test_view_projection_uses_preset() {
        let proj = ScreenProjection::from(MapView::Europe);
        assert_eq!(proj.zoom, 6.5);
        assert_eq!(proj.offset, MapView::Europe.params().offset);
    }
}

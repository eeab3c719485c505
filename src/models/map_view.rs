//! Viewport and base tile layer parameters.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_TILE_ATTRIBUTION, DEFAULT_TILE_URL,
    DEFAULT_ZOOM,
};

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude (-90..=90)
    pub lat: f64,
    /// Longitude (-180..=180)
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if both components are inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Initial view of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// Center of the viewport.
    pub center: LatLng,
    /// Zoom level.
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Raster base map source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayer {
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    pub url_template: String,
    /// Attribution text the tile provider requires.
    pub attribution: String,
}

impl TileLayer {
    /// Expands the template for one tile, using subdomain `a`.
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        self.url_template
            .replace("{s}", "a")
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_center_of_india() {
        let view = MapView::default();
        assert_eq!(view.center, LatLng::new(23.5, 80.0));
        assert_eq!(view.zoom, 5);
    }

    #[test]
    fn test_tile_url_expansion() {
        let layer = TileLayer::default();
        assert_eq!(
            layer.tile_url(5, 22, 13),
            "https://a.tile.openstreetmap.org/5/22/13.png"
        );
        assert_eq!(layer.attribution, "© OpenStreetMap contributors");
    }

    #[test]
    fn test_latlng_validity() {
        assert!(LatLng::new(23.5, 80.0).is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -181.0).is_valid());
    }
}

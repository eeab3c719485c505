//! Application-wide constants.
//!
//! This module defines the application identity and the default map
//! parameters shared by the library, the CLI and the web host.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Craft Map";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "craftmap";

/// The directory name for application data under the platform config dir.
///
/// - Linux: `~/.config/craftmap/`
/// - macOS: `~/Library/Application Support/craftmap/`
/// - Windows: `%APPDATA%\craftmap\`
pub const APP_DATA_DIR: &str = "craftmap";

/// Text shown for any region the craft registry has no entry for.
pub const FALLBACK_CRAFTS: &str = "No data available.";

/// Default GeoJSON document, resolved relative to the working directory.
pub const DEFAULT_GEOJSON: &str = "india_states.geojson";

/// Latitude of the initial map center (geographic center of India).
pub const DEFAULT_CENTER_LAT: f64 = 23.5;

/// Longitude of the initial map center.
pub const DEFAULT_CENTER_LNG: f64 = 80.0;

/// Initial zoom level.
pub const DEFAULT_ZOOM: u8 = 5;

/// OpenStreetMap raster tile URL template.
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution required by the OpenStreetMap tile usage policy.
pub const DEFAULT_TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Default port for the web host.
pub const DEFAULT_PORT: u16 = 3001;

/// Default bind address for the web host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

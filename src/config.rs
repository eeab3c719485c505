//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution. Every section
//! has defaults, so a missing file or a partial file is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_DATA_DIR, DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_GEOJSON, DEFAULT_HOST,
    DEFAULT_PORT, DEFAULT_TILE_ATTRIBUTION, DEFAULT_TILE_URL, DEFAULT_ZOOM,
};
use crate::crafts::{CraftRegistry, MatchMode};
use crate::models::{LatLng, MapView, RgbColor, StyleDescriptor, TileLayer};
use crate::style::FeatureStyler;

/// Viewport, base layer and region document settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial map center
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: u8,
    /// Tile URL template
    pub tile_url: String,
    /// Tile attribution text
    pub tile_attribution: String,
    /// GeoJSON document location (file path or http(s) URL)
    pub geojson: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG),
            zoom: DEFAULT_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            geojson: DEFAULT_GEOJSON.to_string(),
        }
    }
}

/// Craft registry settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// How region names are matched against registry keys
    pub match_mode: MatchMode,
    /// Additional entries; an entry with a built-in name replaces it
    pub extra: BTreeMap<String, String>,
}

/// Region color overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StyleConfig {
    /// Resting fill color (`#rrggbb` or `#rgb`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_fill: Option<String>,
    /// Hover fill color (`#rrggbb` or `#rgb`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_fill: Option<String>,
}

/// Web host settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/craftmap/config.toml`
/// - macOS: `~/Library/Application Support/craftmap/config.toml`
/// - Windows: `%APPDATA%\craftmap\config.toml`
///
/// # Validation
///
/// - `map.center` must be a valid coordinate
/// - `map.zoom` must be at most 20
/// - `map.tile_url` must contain `{z}`, `{x}` and `{y}`
/// - style overrides must be hex colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Map settings
    pub map: MapConfig,
    /// Registry settings
    pub registry: RegistryConfig,
    /// Style overrides
    pub style: StyleConfig,
    /// Web host settings
    pub server: ServerConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.map.center.is_valid() {
            anyhow::bail!(
                "Map center is out of range: ({}, {})",
                self.map.center.lat,
                self.map.center.lng
            );
        }

        if self.map.zoom > 20 {
            anyhow::bail!("Map zoom must be between 0 and 20, got {}", self.map.zoom);
        }

        for placeholder in ["{z}", "{x}", "{y}"] {
            if !self.map.tile_url.contains(placeholder) {
                anyhow::bail!(
                    "Tile URL template is missing {placeholder}: {}",
                    self.map.tile_url
                );
            }
        }

        if self.map.geojson.trim().is_empty() {
            anyhow::bail!("GeoJSON location must not be empty");
        }

        if let Some(fill) = &self.style.base_fill {
            RgbColor::from_hex(fill).context("Invalid style.base_fill")?;
        }
        if let Some(fill) = &self.style.highlight_fill {
            RgbColor::from_hex(fill).context("Invalid style.highlight_fill")?;
        }

        Ok(())
    }

    /// Initial viewport.
    pub fn view(&self) -> MapView {
        MapView {
            center: self.map.center,
            zoom: self.map.zoom,
        }
    }

    /// Base tile layer.
    pub fn tile_layer(&self) -> TileLayer {
        TileLayer {
            url_template: self.map.tile_url.clone(),
            attribution: self.map.tile_attribution.clone(),
        }
    }

    /// Built-in registry plus configured extra entries.
    pub fn registry(&self) -> CraftRegistry {
        CraftRegistry::builtin_with_mode(self.registry.match_mode)
            .with_entries(self.registry.extra.clone())
    }

    /// Styler with configured fill overrides applied.
    pub fn styler(&self) -> Result<FeatureStyler> {
        let mut base = StyleDescriptor::base();
        let mut highlight = StyleDescriptor::highlight();

        if let Some(fill) = &self.style.base_fill {
            base = base.with_fill(RgbColor::from_hex(fill)?.to_hex());
        }
        if let Some(fill) = &self.style.highlight_fill {
            highlight = highlight.with_fill(RgbColor::from_hex(fill)?.to_hex());
        }

        Ok(FeatureStyler::new(base, highlight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.map.center, LatLng::new(23.5, 80.0));
        assert_eq!(config.map.zoom, 5);
        assert_eq!(config.map.geojson, "india_states.geojson");
        assert_eq!(config.registry.match_mode, MatchMode::Strict);
        assert_eq!(config.server.port, 3001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        let mut config = Config::new();
        config.map.zoom = 6;
        config.registry.match_mode = MatchMode::Normalized;
        config
            .registry
            .extra
            .insert("Assam".to_string(), "Muga Silk, Bell Metal".to_string());
        config.style.highlight_fill = Some("#e67e22".to_string());

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[server]\nport = 8080\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.map, MapConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::new();
        config.map.zoom = 25;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.map.center = LatLng::new(120.0, 80.0);
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.map.tile_url = "https://tiles.example.com/static.png".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.style.base_fill = Some("white".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_registry_includes_extra_entries() {
        let mut config = Config::new();
        config
            .registry
            .extra
            .insert("Maharashtra".to_string(), "Warli Painting".to_string());
        let registry = config.registry();
        assert_eq!(registry.lookup("Maharashtra"), "Warli Painting");
        assert_eq!(
            registry.lookup("Kerala"),
            "Kathakali Masks, Aranmula Kannadi, Coir Products"
        );
    }

    #[test]
    fn test_styler_applies_overrides() {
        let mut config = Config::new();
        config.style.base_fill = Some("#EEE".to_string());
        let styler = config.styler().unwrap();
        assert_eq!(styler.base().fill_color, "#eeeeee");
        assert_eq!(styler.highlight().fill_color, "#f1c40f");
    }
}

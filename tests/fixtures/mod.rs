//! Shared test fixtures for integration and CLI tests.
#![allow(dead_code)] // Each test crate uses a different subset

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small FeatureCollection: two registry hits, one miss, one unnamed feature.
pub const SAMPLE_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "name": "Kerala" },
      "geometry": { "type": "Polygon", "coordinates": [[[74.9, 8.2], [77.4, 8.2], [77.4, 11.6], [74.9, 11.6], [74.9, 8.2]]] }
    },
    {
      "type": "Feature",
      "properties": { "name": "Maharashtra" },
      "geometry": { "type": "Polygon", "coordinates": [[[72.6, 15.8], [80.9, 15.8], [80.9, 21.1], [72.6, 21.1], [72.6, 15.8]]] }
    },
    {
      "type": "Feature",
      "properties": { "name": "Gujarat" },
      "geometry": { "type": "MultiPolygon", "coordinates": [[[[68.2, 20.1], [74.4, 20.1], [74.4, 23.1], [68.2, 23.1], [68.2, 20.1]]]] }
    },
    {
      "type": "Feature",
      "properties": { "id": 99 },
      "geometry": null
    }
  ]
}"#;

/// Writes [`SAMPLE_GEOJSON`] into a fresh temp dir.
///
/// The returned `TempDir` must be kept alive while the file is used.
pub fn write_sample_geojson() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("india_states.geojson");
    fs::write(&path, SAMPLE_GEOJSON).expect("Failed to write GeoJSON");
    (path, temp_dir)
}

/// Writes a config file with `body` into `dir` and returns its path.
pub fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, body).expect("Failed to write config");
    path
}

/// A path inside a fresh temp dir where no config file exists yet.
pub fn empty_config_path() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    (temp_dir.path().join("config.toml"), temp_dir)
}

//! End-to-end tests for `craftmap inspect`.

use std::process::{Command, Output};

use serde_json::Value;

mod fixtures;
use fixtures::*;

/// Path to the craftmap binary
fn craftmap_bin() -> &'static str {
    env!("CARGO_BIN_EXE_craftmap")
}

fn inspect(args: &[&str]) -> Output {
    let (config_path, _temp_dir) = empty_config_path();
    Command::new(craftmap_bin())
        .arg("--config")
        .arg(&config_path)
        .arg("inspect")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_inspect_reports_coverage() {
    let (path, _temp_dir) = write_sample_geojson();

    let output = inspect(&[path.to_str().unwrap(), "--json"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(json["loaded"], true);
    assert_eq!(json["matched"], 2);
    assert_eq!(json["unmatched"], 2);
    assert_eq!(json["view"]["zoom"], 5);
    assert!(json.get("error").is_none());

    let regions = json["regions"].as_array().unwrap();
    assert_eq!(regions.len(), 4);
    assert_eq!(regions[0]["name"], "Kerala");
    assert_eq!(regions[0]["geometry"], "Polygon");
    assert_eq!(regions[2]["geometry"], "MultiPolygon");
    assert!(regions[3]["geometry"].is_null());
}

#[test]
fn test_inspect_select_opens_popup() {
    let (path, _temp_dir) = write_sample_geojson();

    let output = inspect(&[path.to_str().unwrap(), "--select", "Kerala", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["popup"]["title"], "Kerala");
    assert_eq!(
        json["popup"]["crafts"],
        "Kathakali Masks, Aranmula Kannadi, Coir Products"
    );
}

#[test]
fn test_inspect_select_unregistered_region() {
    let (path, _temp_dir) = write_sample_geojson();

    let output = inspect(&[path.to_str().unwrap(), "--select", "Maharashtra"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Traditional Crafts: No data available."));
}

#[test]
fn test_inspect_select_unknown_region() {
    let (path, _temp_dir) = write_sample_geojson();

    let output = inspect(&[path.to_str().unwrap(), "--select", "Atlantis"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Atlantis"));
}

#[test]
fn test_inspect_missing_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.geojson");

    let output = inspect(&[missing.to_str().unwrap(), "--json"]);

    assert_eq!(output.status.code(), Some(2), "Load failure should exit with 2");
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["loaded"], false);
    assert!(json["error"].is_string());
    assert_eq!(json["regions"].as_array().unwrap().len(), 0);
    // The base map view is still reported.
    assert_eq!(json["view"]["center"]["lat"], 23.5);
}

#[test]
fn test_inspect_invalid_document() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.geojson");
    std::fs::write(&path, "{\"type\": \"Topology\"}").unwrap();

    let output = inspect(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Not loaded"));
}

#[test]
fn test_inspect_invalid_location() {
    let output = inspect(&["https://exa mple.com/india_states.geojson"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_inspect_uses_configured_document() {
    let (geojson, _geo_dir) = write_sample_geojson();
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = write_config(
        temp_dir.path(),
        &format!("[map]\ngeojson = {:?}\n", geojson.display().to_string()),
    );

    let output = Command::new(craftmap_bin())
        .arg("--config")
        .arg(&config_path)
        .args(["inspect", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["regions"].as_array().unwrap().len(), 4);
}

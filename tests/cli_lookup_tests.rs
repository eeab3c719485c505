//! End-to-end tests for `craftmap lookup` and `craftmap crafts`.

use std::process::{Command, Output};

use serde_json::Value;

mod fixtures;
use fixtures::*;

/// Path to the craftmap binary
fn craftmap_bin() -> &'static str {
    env!("CARGO_BIN_EXE_craftmap")
}

/// Runs craftmap against an isolated, empty configuration location.
fn run_isolated(args: &[&str]) -> Output {
    let (config_path, _temp_dir) = empty_config_path();
    Command::new(craftmap_bin())
        .arg("--config")
        .arg(&config_path)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_lookup_registered_state() {
    let output = run_isolated(&["lookup", "Kerala"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Kerala"));
    assert!(stdout.contains("Kathakali Masks, Aranmula Kannadi, Coir Products"));
}

#[test]
fn test_lookup_json() {
    let output = run_isolated(&["lookup", "Odisha", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json: Value = serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(json["state"], "Odisha");
    assert_eq!(json["found"], true);
    assert_eq!(
        json["crafts"],
        "Pattachitra Paintings, Appliqué Work, Silver Filigree"
    );
}

#[test]
fn test_lookup_unregistered_state_prints_fallback() {
    let output = run_isolated(&["lookup", "Maharashtra", "--json"]);

    assert_eq!(output.status.code(), Some(1), "Miss should exit with 1");
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], false);
    assert_eq!(json["crafts"], "No data available.");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Maharashtra"));
}

#[test]
fn test_lookup_is_exact_by_default() {
    let output = run_isolated(&["lookup", "kerala"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No data available."));
}

#[test]
fn test_lookup_normalize_flag() {
    let output = run_isolated(&["lookup", "  jammu & KASHMIR ", "--normalize", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["crafts"],
        "Pashmina Shawls, Walnut Wood Carving, Paper Mache"
    );
}

#[test]
fn test_lookup_html() {
    let output = run_isolated(&["lookup", "Goa", "--html"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        "<h3>Goa</h3><p>Traditional Crafts: Terracotta and Clay Work, Coir Craft, Wood Carving</p>"
    );
}

#[test]
fn test_lookup_html_and_json_conflict() {
    let output = run_isolated(&["lookup", "Goa", "--html", "--json"]);

    assert_eq!(output.status.code(), Some(2), "clap usage errors exit with 2");
}

#[test]
fn test_lookup_uses_configured_extra_entries() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = write_config(
        temp_dir.path(),
        r#"
[registry.extra]
Maharashtra = "Paithani Saree, Warli Painting, Kolhapuri Chappal"
"#,
    );

    let output = Command::new(craftmap_bin())
        .arg("--config")
        .arg(&config_path)
        .args(["lookup", "Maharashtra", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["crafts"],
        "Paithani Saree, Warli Painting, Kolhapuri Chappal"
    );
}

// ============================================================================
// Crafts Listing Tests
// ============================================================================

#[test]
fn test_crafts_json() {
    let output = run_isolated(&["crafts", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().expect("Output should be an array");
    assert_eq!(entries.len(), 9);
    assert!(entries.iter().any(|e| e["state"] == "Bihar"));
    assert!(entries.iter().all(|e| e["state"] != "Maharashtra"));
}

#[test]
fn test_crafts_table() {
    let output = run_isolated(&["crafts"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("West Bengal"));
    assert!(stdout.contains("Madhubani Painting"));
    assert!(stdout.trim_end().ends_with("9 states"));
}

//! GeoJSON inspection command.
//!
//! Bootstraps the map against the headless surface and reports which regions
//! loaded and which of them have a craft entry.

use crate::bootstrap::{MapBootstrap, SourceLocation};
use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{MapView, Popup};
use crate::surface::HeadlessSurface;
use clap::Args;
use serde::Serialize;

/// Load a GeoJSON document and report registry coverage
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// GeoJSON file path or http(s) URL (defaults to the configured document)
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// Simulate a click on this region and print its popup
    #[arg(long, value_name = "STATE")]
    pub select: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InspectReport {
    source: String,
    view: MapView,
    loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    regions: Vec<RegionReport>,
    matched: usize,
    unmatched: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    popup: Option<Popup>,
}

#[derive(Debug, Serialize)]
struct RegionReport {
    name: Option<String>,
    geometry: Option<String>,
    has_crafts: bool,
}

impl InspectArgs {
    /// Execute the inspect command.
    pub async fn execute(&self, config: &Config) -> CliResult<()> {
        let location = self.source.as_deref().unwrap_or(&config.map.geojson);
        let source =
            SourceLocation::parse(location).map_err(|e| CliError::validation(e.to_string()))?;

        let bootstrap = MapBootstrap::from_config(config)
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        let mut session = bootstrap.run(HeadlessSurface::new(), &source).await;

        let popup = match &self.select {
            Some(name) => match session.select(name) {
                Some(popup) => Some(popup),
                None if session.status().is_loaded() => {
                    return Err(CliError::validation(format!(
                        "No region named '{name}' in {location}"
                    )));
                }
                None => None,
            },
            None => None,
        };

        let registry = bootstrap.registry();
        let regions: Vec<RegionReport> = session
            .region_layer()
            .map(|layer| {
                layer
                    .entries()
                    .iter()
                    .map(|entry| RegionReport {
                        name: entry.region.name.clone(),
                        geometry: entry.region.geometry_type().map(str::to_string),
                        has_crafts: registry.contains(entry.region.display_name()),
                    })
                    .collect()
            })
            .unwrap_or_default();
        let matched = regions.iter().filter(|r| r.has_crafts).count();

        let report = InspectReport {
            source: location.to_string(),
            view: bootstrap.view(),
            loaded: session.status().is_loaded(),
            error: session.status().error().map(ToString::to_string),
            unmatched: regions.len() - matched,
            matched,
            regions,
            popup,
        };

        if self.json {
            print_json(&report)?;
        } else {
            print_report(&report);
        }

        match session.status().error() {
            Some(err) => Err(CliError::io(format!("Failed to load {location}: {err}"))),
            None => Ok(()),
        }
    }
}

fn print_report(report: &InspectReport) {
    println!("Source:  {}", report.source);
    println!(
        "View:    {:.2}, {:.2} @ zoom {}",
        report.view.center.lat, report.view.center.lng, report.view.zoom
    );

    if !report.loaded {
        println!("Status:  ✗ Not loaded");
        return;
    }

    println!("Status:  ✓ {} regions", report.regions.len());
    println!(
        "Crafts:  {} with data, {} without",
        report.matched, report.unmatched
    );
    println!();
    for region in &report.regions {
        let marker = if region.has_crafts { "✓" } else { "·" };
        println!(
            "  {} {}",
            marker,
            region.name.as_deref().unwrap_or("(unnamed)")
        );
    }

    if let Some(popup) = &report.popup {
        println!();
        println!("{}", popup.title);
        println!("  Traditional Crafts: {}", popup.crafts);
    }
}

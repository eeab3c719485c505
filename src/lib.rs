//! Craft Map Library
//!
//! This library provides the pieces of the interactive map of Indian states
//! and their artisan crafts: the craft registry, region styling, the
//! interaction binder, the map bootstrap that loads the GeoJSON document,
//! and the web host that serves the page.

// Module declarations
pub mod binder;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod constants;
pub mod crafts;
pub mod logging;
pub mod models;
pub mod style;
pub mod surface;
#[cfg(feature = "web")]
pub mod web;

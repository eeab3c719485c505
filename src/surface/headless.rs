//! In-memory surface that records what a renderer would display.

use serde::Serialize;

use super::{MapSurface, RegionHandle};
use crate::models::{Label, MapView, Popup, Region, StyleDescriptor, TileLayer};

/// Recorded state of one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlessRegion {
    /// Region name at creation time.
    pub name: String,
    /// Style currently applied.
    pub style: StyleDescriptor,
    /// Label currently shown.
    pub label: Option<Label>,
    /// Popup currently open.
    pub popup: Option<Popup>,
    /// How many times a popup has been opened on this region.
    pub popups_opened: usize,
}

impl RegionHandle for HeadlessRegion {
    fn set_style(&mut self, style: &StyleDescriptor) {
        self.style = style.clone();
    }

    fn show_label(&mut self, label: Label) {
        self.label = Some(label);
    }

    fn hide_label(&mut self) {
        self.label = None;
    }

    fn open_popup(&mut self, popup: Popup) {
        self.popup = Some(popup);
        self.popups_opened += 1;
    }
}

/// Recorded state of the whole map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeadlessSurface {
    /// Current viewport, once set.
    pub view: Option<MapView>,
    /// Tile layers in the order they were attached.
    pub tile_layers: Vec<TileLayer>,
    /// Number of regions in the region layer, once added.
    pub region_layer: Option<usize>,
    /// Error banner text, if one is shown.
    pub error: Option<String>,
}

impl HeadlessSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once a region layer has been added.
    pub fn has_region_layer(&self) -> bool {
        self.region_layer.is_some()
    }
}

impl MapSurface for HeadlessSurface {
    type Region = HeadlessRegion;

    fn set_view(&mut self, view: MapView) {
        self.view = Some(view);
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layers.push(layer.clone());
    }

    fn create_region(&mut self, region: &Region, style: &StyleDescriptor) -> HeadlessRegion {
        HeadlessRegion {
            name: region.display_name().to_string(),
            style: style.clone(),
            label: None,
            popup: None,
            popups_opened: 0,
        }
    }

    fn add_region_layer(&mut self, region_count: usize) {
        self.region_layer = Some(region_count);
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}

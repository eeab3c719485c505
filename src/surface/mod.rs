//! Rendering capability interface.
//!
//! The map logic never talks to a concrete mapping library. It drives a
//! [`MapSurface`] (viewport, tile layer, region layer, error banner) and, per
//! rendered region, a [`RegionHandle`] (style, label, popup). The browser page
//! implements the same operations on top of Leaflet; [`HeadlessSurface`]
//! implements them in memory for the CLI and for tests.

pub mod headless;

pub use headless::{HeadlessRegion, HeadlessSurface};

use crate::models::{Label, MapView, Popup, Region, StyleDescriptor, TileLayer};

/// Per-region hooks a renderer exposes to the interaction binder.
pub trait RegionHandle {
    /// Replaces the region's current path style.
    fn set_style(&mut self, style: &StyleDescriptor);

    /// Shows `label` on the region, replacing any label already shown.
    fn show_label(&mut self, label: Label);

    /// Removes the region's label, if any.
    fn hide_label(&mut self);

    /// Opens `popup` on the region, replacing any popup already open on it.
    fn open_popup(&mut self, popup: Popup);
}

/// Map-level operations used by the bootstrap.
pub trait MapSurface {
    /// Handle type for one rendered region.
    type Region: RegionHandle;

    /// Centers the viewport.
    fn set_view(&mut self, view: MapView);

    /// Attaches a raster base layer.
    fn add_tile_layer(&mut self, layer: &TileLayer);

    /// Draws one region with its resting style and returns its handle.
    fn create_region(&mut self, region: &Region, style: &StyleDescriptor) -> Self::Region;

    /// Marks the region layer as added to the viewport.
    fn add_region_layer(&mut self, region_count: usize);

    /// Shows a visible error message in the viewport.
    fn show_error(&mut self, message: &str);
}

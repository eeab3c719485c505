//! Rendered region layer: regions paired with their renderer handles.

use crate::binder::{InteractionBinder, RegionEvent};
use crate::models::{Popup, Region};
use crate::surface::RegionHandle;

/// One region and the handle the surface returned for it.
#[derive(Debug, Clone)]
pub struct BoundRegion<H> {
    /// The GeoJSON feature.
    pub region: Region,
    /// Renderer handle for the drawn feature.
    pub handle: H,
}

/// All regions of a loaded document, wired to the interaction binder.
#[derive(Debug, Clone)]
pub struct RegionLayer<H> {
    binder: InteractionBinder,
    entries: Vec<BoundRegion<H>>,
}

impl<H: RegionHandle> RegionLayer<H> {
    pub(crate) fn new(binder: InteractionBinder, entries: Vec<BoundRegion<H>>) -> Self {
        Self { binder, entries }
    }

    /// Delivers `event` to the region at `index`.
    ///
    /// Returns the opened popup for select events; `None` for other events
    /// or an out-of-range index.
    pub fn dispatch(&mut self, index: usize, event: RegionEvent) -> Option<Popup> {
        let binder = &self.binder;
        let entry = self.entries.get_mut(index)?;
        binder.dispatch(event, &entry.region, &mut entry.handle)
    }

    /// Delivers `event` to the first region named `name`.
    ///
    /// Returns false if no region has that name.
    pub fn dispatch_named(&mut self, name: &str, event: RegionEvent) -> (bool, Option<Popup>) {
        match self.position(name) {
            Some(index) => (true, self.dispatch(index, event)),
            None => (false, None),
        }
    }

    /// Index of the first region named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.region.name.as_deref() == Some(name))
    }

    /// Handle of the first region named `name`.
    pub fn handle(&self, name: &str) -> Option<&H> {
        self.position(name).map(|i| &self.entries[i].handle)
    }

    /// All bound regions in document order.
    pub fn entries(&self) -> &[BoundRegion<H>] {
        &self.entries
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the layer has no regions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Binder wired to this layer.
    pub fn binder(&self) -> &InteractionBinder {
        &self.binder
    }
}

//! Interaction binder: hover and click reactions for rendered regions.
//!
//! The binder owns no per-region state. Everything transient lives in the
//! [`RegionHandle`] it is given, and the resting style to restore comes from
//! the styler the region layer was built with.

use std::sync::Arc;

use tracing::debug;

use crate::crafts::CraftRegistry;
use crate::models::{Label, Popup, Region};
use crate::style::FeatureStyler;
use crate::surface::RegionHandle;

/// Pointer events a rendered region reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionEvent {
    /// Pointer moved onto the region.
    Enter,
    /// Pointer left the region.
    Leave,
    /// Region was clicked.
    Select,
}

/// Attaches hover/click behavior to regions.
#[derive(Debug, Clone)]
pub struct InteractionBinder {
    registry: Arc<CraftRegistry>,
    styler: Arc<FeatureStyler>,
}

impl InteractionBinder {
    /// Creates a binder over a registry and the layer's styler.
    pub fn new(registry: Arc<CraftRegistry>, styler: Arc<FeatureStyler>) -> Self {
        Self { registry, styler }
    }

    /// Highlights the region and shows its name above it.
    pub fn on_enter<H: RegionHandle + ?Sized>(&self, region: &Region, handle: &mut H) {
        debug!(region = region.display_name(), "pointer enter");
        handle.set_style(&self.styler.highlight());
        handle.show_label(Label::top(region.display_name()));
    }

    /// Restores the resting style and removes the name label.
    pub fn on_leave<H: RegionHandle + ?Sized>(&self, region: &Region, handle: &mut H) {
        debug!(region = region.display_name(), "pointer leave");
        handle.set_style(&self.styler.style(region));
        handle.hide_label();
    }

    /// Opens the craft popup for the region and returns it.
    pub fn on_select<H: RegionHandle + ?Sized>(&self, region: &Region, handle: &mut H) -> Popup {
        let popup = self.popup_for(region);
        debug!(
            region = region.display_name(),
            hit = self.registry.contains(region.display_name()),
            "region selected"
        );
        handle.open_popup(popup.clone());
        popup
    }

    /// Builds the popup a click on `region` would open.
    pub fn popup_for(&self, region: &Region) -> Popup {
        let name = region.display_name();
        Popup::new(name, self.registry.lookup(name))
    }

    /// Routes `event` to the matching reaction.
    ///
    /// Returns the popup for [`RegionEvent::Select`], `None` otherwise.
    pub fn dispatch<H: RegionHandle + ?Sized>(
        &self,
        event: RegionEvent,
        region: &Region,
        handle: &mut H,
    ) -> Option<Popup> {
        match event {
            RegionEvent::Enter => {
                self.on_enter(region, handle);
                None
            }
            RegionEvent::Leave => {
                self.on_leave(region, handle);
                None
            }
            RegionEvent::Select => Some(self.on_select(region, handle)),
        }
    }

    /// Registry the binder looks crafts up in.
    pub fn registry(&self) -> &CraftRegistry {
        &self.registry
    }

    /// Styler the binder restores resting styles from.
    pub fn styler(&self) -> &FeatureStyler {
        &self.styler
    }
}

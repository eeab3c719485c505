//! Feature styling.
//!
//! Every region currently gets the same resting style; the styler takes the
//! region anyway so per-state coloring can be added without changing callers.

use crate::models::{Region, StyleDescriptor};

/// Maps regions to their resting style and provides the hover highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStyler {
    base: StyleDescriptor,
    highlight: StyleDescriptor,
}

impl FeatureStyler {
    /// Creates a styler from explicit base and highlight descriptors.
    pub fn new(base: StyleDescriptor, highlight: StyleDescriptor) -> Self {
        Self { base, highlight }
    }

    /// Resting style for `region`. Pure: same output for every call.
    pub fn style(&self, _region: &Region) -> StyleDescriptor {
        self.base.clone()
    }

    /// Style applied while the pointer is over a region.
    pub fn highlight(&self) -> StyleDescriptor {
        self.highlight.clone()
    }

    /// Resting style without reference to a particular region.
    pub fn base(&self) -> &StyleDescriptor {
        &self.base
    }
}

impl Default for FeatureStyler {
    fn default() -> Self {
        Self::new(StyleDescriptor::base(), StyleDescriptor::highlight())
    }
}

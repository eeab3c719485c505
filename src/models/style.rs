//! Visual style descriptor for rendered regions.

use serde::{Deserialize, Serialize};

/// Path style applied to a region polygon.
///
/// Field names serialize in the camelCase form the browser mapping library
/// expects, so the descriptor can be handed to the page as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    /// Interior fill color.
    pub fill_color: String,
    /// Border (stroke) color.
    pub color: String,
    /// Border width in pixels.
    pub weight: f32,
    /// Border opacity (0.0-1.0).
    pub opacity: f32,
    /// Fill opacity (0.0-1.0).
    pub fill_opacity: f32,
    /// Border dash pattern; empty for a solid line.
    pub dash_array: String,
}

impl StyleDescriptor {
    /// Resting appearance of every region.
    pub fn base() -> Self {
        Self {
            fill_color: "#ffffff".to_string(),
            color: "gray".to_string(),
            weight: 2.0,
            opacity: 1.0,
            fill_opacity: 0.7,
            dash_array: "3".to_string(),
        }
    }

    /// Appearance of the region under the pointer.
    pub fn highlight() -> Self {
        Self {
            fill_color: "#f1c40f".to_string(),
            color: "#666".to_string(),
            weight: 4.0,
            opacity: 1.0,
            fill_opacity: 0.9,
            dash_array: String::new(),
        }
    }

    /// Returns a copy with a different fill color.
    #[must_use]
    pub fn with_fill(mut self, fill_color: impl Into<String>) -> Self {
        self.fill_color = fill_color.into();
        self
    }

    /// True when the border is drawn solid.
    pub fn is_solid(&self) -> bool {
        self.dash_array.is_empty()
    }
}

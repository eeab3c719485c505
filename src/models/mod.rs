//! Data models for regions, styles, overlays and the map viewport.
//!
//! Models are independent of any renderer; surfaces and the web host
//! translate them into whatever the drawing side needs.

pub mod color;
pub mod map_view;
pub mod overlay;
pub mod region;
pub mod style;

// Re-export all model types
pub use color::RgbColor;
pub use map_view::{LatLng, MapView, TileLayer};
pub use overlay::{escape_html, Label, LabelPlacement, Popup};
pub use region::{Region, RegionCollection, RegionParseError};
pub use style::StyleDescriptor;

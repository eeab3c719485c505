//! Map bootstrap.
//!
//! Sets up the viewport and base tiles, retrieves the GeoJSON document once,
//! and turns it into a [`RegionLayer`] on the given surface. A failed load
//! leaves the base map in place, logs the failure and shows an error banner.
//!
//! # Example
//!
//! ```no_run
//! use craftmap::bootstrap::{FileSource, MapBootstrap};
//! use craftmap::surface::HeadlessSurface;
//!
//! # async fn example() {
//! let bootstrap = MapBootstrap::default();
//! let mut session = bootstrap
//!     .run(HeadlessSurface::new(), &FileSource::new("india_states.geojson"))
//!     .await;
//! if let Some(popup) = session.select("Kerala") {
//!     println!("{}", popup.to_html());
//! }
//! # }
//! ```

pub mod layer;
pub mod source;

pub use layer::{BoundRegion, RegionLayer};
pub use source::{FileSource, GeoJsonSource, HttpSource, InlineSource, SourceLocation};

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info};

use crate::binder::{InteractionBinder, RegionEvent};
use crate::config::Config;
use crate::crafts::CraftRegistry;
use crate::models::{MapView, Popup, RegionCollection, RegionParseError, TileLayer};
use crate::style::FeatureStyler;
use crate::surface::MapSurface;

/// Why the region document could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading a local file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The HTTP request could not be completed.
    #[error("request to {url} failed: {source}")]
    Http {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{url} answered with HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The configured location is not usable.
    #[error("invalid GeoJSON location `{location}`: {reason}")]
    InvalidLocation {
        /// Location as configured.
        location: String,
        /// Parser message.
        reason: String,
    },
    /// The document was retrieved but is not a usable FeatureCollection.
    #[error(transparent)]
    Parse(#[from] RegionParseError),
}

/// A successfully retrieved and parsed document.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Document text as retrieved.
    pub raw: String,
    /// Parsed regions.
    pub regions: RegionCollection,
}

/// Outcome of the document load.
#[derive(Debug)]
pub enum LoadStatus {
    /// The region layer was added with this many regions.
    Loaded {
        /// Number of regions in the layer.
        regions: usize,
    },
    /// No region layer was added.
    Failed(LoadError),
}

impl LoadStatus {
    /// Returns true if the region layer was added.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// The load error, if the load failed.
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Loaded { .. } => None,
        }
    }
}

/// Initializes a map surface and wires regions to their behavior.
#[derive(Debug, Clone)]
pub struct MapBootstrap {
    view: MapView,
    tiles: TileLayer,
    registry: Arc<CraftRegistry>,
    styler: Arc<FeatureStyler>,
}

impl MapBootstrap {
    /// Creates a bootstrap from explicit parts.
    pub fn new(
        view: MapView,
        tiles: TileLayer,
        registry: Arc<CraftRegistry>,
        styler: Arc<FeatureStyler>,
    ) -> Self {
        Self {
            view,
            tiles,
            registry,
            styler,
        }
    }

    /// Creates a bootstrap from application configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(
            config.view(),
            config.tile_layer(),
            Arc::new(config.registry()),
            Arc::new(config.styler()?),
        ))
    }

    /// Initial viewport.
    pub fn view(&self) -> MapView {
        self.view
    }

    /// Base tile layer.
    pub fn tiles(&self) -> &TileLayer {
        &self.tiles
    }

    /// Shared craft registry.
    pub fn registry(&self) -> &Arc<CraftRegistry> {
        &self.registry
    }

    /// Shared styler.
    pub fn styler(&self) -> &Arc<FeatureStyler> {
        &self.styler
    }

    /// Binder over this bootstrap's registry and styler.
    pub fn binder(&self) -> InteractionBinder {
        InteractionBinder::new(Arc::clone(&self.registry), Arc::clone(&self.styler))
    }

    /// Retrieves and parses the document once.
    pub async fn load<G: GeoJsonSource>(source: &G) -> Result<LoadedDocument, LoadError> {
        let raw = source.fetch().await?;
        let regions = RegionCollection::from_geojson(&raw)?;
        Ok(LoadedDocument { raw, regions })
    }

    /// Sets up `surface` and loads the region layer from `source`.
    ///
    /// The viewport and tile layer are configured before the fetch, so they
    /// are present whether or not the document loads.
    pub async fn run<S, G>(&self, mut surface: S, source: &G) -> MapSession<S>
    where
        S: MapSurface,
        G: GeoJsonSource,
    {
        surface.set_view(self.view);
        surface.add_tile_layer(&self.tiles);

        match Self::load(source).await {
            Ok(document) => {
                let layer = self.build_layer(&mut surface, document.regions);
                surface.add_region_layer(layer.len());
                info!(
                    source = %source.describe(),
                    regions = layer.len(),
                    "region layer added"
                );
                MapSession {
                    surface,
                    status: LoadStatus::Loaded {
                        regions: layer.len(),
                    },
                    layer: Some(layer),
                }
            }
            Err(err) => {
                error!(source = %source.describe(), error = %err, "failed to load regions");
                surface.show_error(&format!("Could not load state boundaries: {err}"));
                MapSession {
                    surface,
                    status: LoadStatus::Failed(err),
                    layer: None,
                }
            }
        }
    }

    /// Styles every region and creates its handle on the surface.
    fn build_layer<S: MapSurface>(
        &self,
        surface: &mut S,
        regions: RegionCollection,
    ) -> RegionLayer<S::Region> {
        let entries = regions
            .into_iter()
            .map(|region| {
                let style = self.styler.style(&region);
                let handle = surface.create_region(&region, &style);
                BoundRegion { region, handle }
            })
            .collect();
        RegionLayer::new(self.binder(), entries)
    }
}

impl Default for MapBootstrap {
    fn default() -> Self {
        Self::new(
            MapView::default(),
            TileLayer::default(),
            Arc::new(CraftRegistry::builtin()),
            Arc::new(FeatureStyler::default()),
        )
    }
}

/// A bootstrapped map: the surface plus the region layer, if it loaded.
pub struct MapSession<S: MapSurface> {
    surface: S,
    status: LoadStatus,
    layer: Option<RegionLayer<S::Region>>,
}

impl<S: MapSurface> MapSession<S> {
    /// Outcome of the document load.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The region layer, if the document loaded.
    pub fn region_layer(&self) -> Option<&RegionLayer<S::Region>> {
        self.layer.as_ref()
    }

    /// Pointer enters the region named `name`. Returns false if unknown.
    pub fn enter(&mut self, name: &str) -> bool {
        self.send(name, RegionEvent::Enter).0
    }

    /// Pointer leaves the region named `name`. Returns false if unknown.
    pub fn leave(&mut self, name: &str) -> bool {
        self.send(name, RegionEvent::Leave).0
    }

    /// Clicks the region named `name` and returns the opened popup.
    pub fn select(&mut self, name: &str) -> Option<Popup> {
        self.send(name, RegionEvent::Select).1
    }

    fn send(&mut self, name: &str, event: RegionEvent) -> (bool, Option<Popup>) {
        match self.layer.as_mut() {
            Some(layer) => layer.dispatch_named(name, event),
            None => (false, None),
        }
    }
}

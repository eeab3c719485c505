//! Web host for craftmap.
//!
//! Serves the browser map page, the GeoJSON region document and a small JSON
//! API backed by the craft registry and styler, so the page holds no craft
//! data of its own.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/map` - Viewport, tile layer and region styles
//! - `GET /api/crafts` - All craft registry entries
//! - `GET /api/crafts/{state}` - Crafts for one state (fallback on miss)
//! - `GET /api/regions` - Regions of the loaded document
//! - `GET /api/popup?state=` - Popup content for a clicked region
//! - `GET /india_states.geojson` - The loaded GeoJSON document
//! - everything else - Embedded page assets

pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::bootstrap::{LoadError, LoadedDocument, MapBootstrap, SourceLocation};
use crate::config::Config;
use crate::constants::{APP_NAME, FALLBACK_CRAFTS};
use crate::models::{LatLng, Region, StyleDescriptor, TileLayer};

/// Path the page fetches the region document from.
pub const GEOJSON_ROUTE: &str = "/india_states.geojson";

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web host.
///
/// Everything here is immutable after startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    bootstrap: Arc<MapBootstrap>,
    /// Loaded document, or the message of the load failure
    document: Arc<Result<LoadedDocument, String>>,
}

impl AppState {
    /// Creates the state from configuration and a load outcome.
    pub fn new(config: &Config, document: Result<LoadedDocument, LoadError>) -> anyhow::Result<Self> {
        let bootstrap = MapBootstrap::from_config(config)?;
        Ok(Self {
            bootstrap: Arc::new(bootstrap),
            document: Arc::new(document.map_err(|e| e.to_string())),
        })
    }

    /// Creates the state, loading the configured GeoJSON document once.
    ///
    /// A failed load is logged and kept as an error state; the server still
    /// starts and serves the base map.
    pub async fn load(config: &Config) -> anyhow::Result<Self> {
        let document = match SourceLocation::parse(&config.map.geojson) {
            Ok(source) => MapBootstrap::load(&source).await,
            Err(err) => Err(err),
        };

        match &document {
            Ok(doc) => info!(
                source = %config.map.geojson,
                regions = doc.regions.len(),
                "GeoJSON document loaded"
            ),
            Err(err) => warn!(
                source = %config.map.geojson,
                error = %err,
                "GeoJSON document unavailable, serving base map only"
            ),
        }

        Self::new(config, document)
    }

    /// Returns true if the region document loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.document.is_ok()
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
    /// Whether the region document loaded.
    pub regions_loaded: bool,
}

/// Map setup consumed by the page.
#[derive(Debug, Serialize)]
pub struct MapConfigResponse {
    /// Initial center.
    pub center: LatLng,
    /// Initial zoom.
    pub zoom: u8,
    /// Base tile layer.
    pub tile_layer: TileLayer,
    /// Resting region style.
    pub base_style: StyleDescriptor,
    /// Hover region style.
    pub highlight_style: StyleDescriptor,
    /// Where to fetch the region document.
    pub geojson_url: String,
    /// Text shown for states without craft data.
    pub fallback: String,
}

/// One craft registry entry.
#[derive(Debug, Serialize)]
pub struct CraftInfo {
    /// State name.
    pub state: String,
    /// Craft description.
    pub crafts: String,
}

/// Craft registry listing.
#[derive(Debug, Serialize)]
pub struct CraftListResponse {
    /// All entries in name order.
    pub crafts: Vec<CraftInfo>,
    /// Number of entries.
    pub total: usize,
}

/// Result of a single craft lookup.
#[derive(Debug, Serialize)]
pub struct CraftLookupResponse {
    /// State name as requested.
    pub state: String,
    /// Craft description or fallback text.
    pub crafts: String,
    /// Whether the registry had an entry.
    pub found: bool,
}

/// One region of the loaded document.
#[derive(Debug, Serialize)]
pub struct RegionInfo {
    /// Region name, if the feature has one.
    pub name: Option<String>,
    /// Whether the registry has crafts for it.
    pub has_crafts: bool,
}

/// Region listing.
#[derive(Debug, Serialize)]
pub struct RegionListResponse {
    /// Regions in document order.
    pub regions: Vec<RegionInfo>,
    /// Number of regions.
    pub total: usize,
}

/// Query parameters for the popup endpoint.
#[derive(Debug, Deserialize)]
pub struct PopupQuery {
    /// Name of the clicked region; missing for unnamed features.
    pub state: Option<String>,
}

/// Popup content for a clicked region.
#[derive(Debug, Serialize)]
pub struct PopupResponse {
    /// Heading (the region name).
    pub title: String,
    /// Craft description or fallback text.
    pub crafts: String,
    /// Rendered, escaped HTML fragment.
    pub html: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Error returned when the region document failed to load.
fn unavailable(message: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiError::with_details(
            "Region document unavailable",
            message,
        )),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        regions_loaded: state.is_loaded(),
    })
}

/// GET /api/map - Map setup for the page.
async fn get_map_config(State(state): State<AppState>) -> Json<MapConfigResponse> {
    let bootstrap = &state.bootstrap;
    let view = bootstrap.view();
    Json(MapConfigResponse {
        center: view.center,
        zoom: view.zoom,
        tile_layer: bootstrap.tiles().clone(),
        base_style: bootstrap.styler().base().clone(),
        highlight_style: bootstrap.styler().highlight(),
        geojson_url: GEOJSON_ROUTE.to_string(),
        fallback: FALLBACK_CRAFTS.to_string(),
    })
}

/// GET /api/crafts - List the craft registry.
async fn list_crafts(State(state): State<AppState>) -> Json<CraftListResponse> {
    let crafts: Vec<CraftInfo> = state
        .bootstrap
        .registry()
        .entries()
        .map(|(name, crafts)| CraftInfo {
            state: name.to_string(),
            crafts: crafts.to_string(),
        })
        .collect();
    let total = crafts.len();
    Json(CraftListResponse { crafts, total })
}

/// GET /api/crafts/{state} - Look up one state.
async fn get_crafts(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<CraftLookupResponse> {
    let registry = state.bootstrap.registry();
    Json(CraftLookupResponse {
        crafts: registry.lookup(&name).to_string(),
        found: registry.contains(&name),
        state: name,
    })
}

/// GET /api/regions - List the regions of the loaded document.
async fn list_regions(
    State(state): State<AppState>,
) -> Result<Json<RegionListResponse>, (StatusCode, Json<ApiError>)> {
    let document = match &*state.document {
        Ok(document) => document,
        Err(message) => return Err(unavailable(message)),
    };
    let registry = state.bootstrap.registry();

    let regions: Vec<RegionInfo> = document
        .regions
        .regions()
        .iter()
        .map(|region| RegionInfo {
            name: region.name.clone(),
            has_crafts: registry.contains(region.display_name()),
        })
        .collect();
    let total = regions.len();
    Ok(Json(RegionListResponse { regions, total }))
}

/// GET /api/popup?state= - Popup content for a clicked region.
async fn get_popup(
    State(state): State<AppState>,
    Query(query): Query<PopupQuery>,
) -> Json<PopupResponse> {
    let region = match query.state {
        Some(name) => Region::named(name),
        None => Region::named(""),
    };
    let popup = state.bootstrap.binder().popup_for(&region);
    Json(PopupResponse {
        html: popup.to_html(),
        title: popup.title,
        crafts: popup.crafts,
    })
}

/// GET /india_states.geojson - The region document as loaded at startup.
async fn serve_geojson(State(state): State<AppState>) -> Response {
    match &*state.document {
        Ok(document) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/geo+json")],
            document.raw.clone(),
        )
            .into_response(),
        Err(message) => unavailable(message).into_response(),
    }
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // The page and API are served from one origin; CORS is open so the page
    // can also be developed from a separate static server.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Map setup
        .route("/api/map", get(get_map_config))
        // Craft registry
        .route("/api/crafts", get(list_crafts))
        .route("/api/crafts/{state}", get(get_crafts))
        // Regions
        .route("/api/regions", get(list_regions))
        .route("/api/popup", get(get_popup))
        .route(GEOJSON_ROUTE, get(serve_geojson))
        // Page assets
        .fallback(static_files::serve_static)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::load(&config).await?;
    let app = create_router(state);

    info!("Starting {} web server on http://{}", APP_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

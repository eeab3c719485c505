//! The map page: `index.html`, the Leaflet adapter script and its stylesheet.
//!
//! The files under `web/` are compiled into the binary, so `craftmap serve`
//! needs nothing on disk except the GeoJSON document.

use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

/// Page that `/` resolves to.
const INDEX_PAGE: &str = "index.html";

/// Page files compiled in from `web/`.
#[derive(Embed)]
#[folder = "web"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.css"]
#[include = "*.ico"]
#[include = "*.svg"]
pub struct StaticAssets;

/// Router fallback: answers with a page file, or 404.
///
/// Only the page files exist here; API and GeoJSON paths are routed before
/// this handler, so any other path is an unknown file rather than a page
/// route.
pub async fn serve_static(request: Request) -> Response {
    let name = asset_name(request.uri().path());

    let Some(asset) = StaticAssets::get(name) else {
        return (StatusCode::NOT_FOUND, format!("No page file named '{name}'")).into_response();
    };

    let content_type = mime_guess::from_path(name).first_or_octet_stream();
    Response::builder()
        .header(header::CONTENT_TYPE, content_type.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(name))
        .body(Body::from(asset.data.into_owned()))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// Maps a request path to an embedded file name.
fn asset_name(path: &str) -> &str {
    match path.trim_start_matches('/') {
        "" => INDEX_PAGE,
        name => name,
    }
}

/// The page itself is revalidated on every load so a new binary's script
/// URLs are picked up; the script and stylesheet may be cached for an hour.
fn cache_control_for_path(name: &str) -> &'static str {
    if name.ends_with(".html") {
        "no-cache, must-revalidate"
    } else {
        "public, max-age=3600"
    }
}

/// Returns true if `index.html` was compiled in.
#[must_use]
pub fn has_embedded_assets() -> bool {
    StaticAssets::get(INDEX_PAGE).is_some()
}

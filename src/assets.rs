//! Static file serving: the `public` directory in front of the API and the
//! client bundle behind it.

use std::path::Path;

use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
};

use crate::config::{AppConfig, AppEnvironment};

/// Files under `public_dir` win; everything else goes to `next`.
pub fn serve_public(public_dir: &Path, next: Router) -> ServeDir<Router> {
    ServeDir::new(public_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(next)
}

/// Catch-all for paths no route claimed.
pub fn client_assets(config: &AppConfig) -> Router {
    match config.environment {
        AppEnvironment::Development => development_assets(&config.client_dir),
        AppEnvironment::Production => production_assets(&config.dist_dir),
    }
}

/// Serves the client tree uncached so edits show up on reload.
fn development_assets(client_dir: &Path) -> Router {
    tracing::info!("Serving development assets from {}", client_dir.display());

    let index = client_dir.join("index.html");
    Router::new()
        .fallback_service(ServeDir::new(client_dir).fallback(ServeFile::new(index)))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
}

/// Serves the built bundle, answering unknown paths with `index.html`.
fn production_assets(dist_dir: &Path) -> Router {
    if !dist_dir.is_dir() {
        tracing::warn!(
            "Could not find the build directory: {}, make sure to build the client first",
            dist_dir.display()
        );
    }

    let index = dist_dir.join("index.html");
    Router::new().fallback_service(ServeDir::new(dist_dir).fallback(ServeFile::new(index)))
}

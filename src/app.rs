//! Application assembly: database, middleware and routing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware::from_fn, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::db::initialize_database;
use crate::error::handle_panic;
use crate::middleware::{cors, log_api_requests, report_errors};
use crate::{assets, handlers, AppState};

/// Binds `0.0.0.0:{port}` and serves until shutdown.
///
/// Under a serverless host nothing is started here; the host drives
/// requests through `ServerlessApp::handle`, which builds the app itself.
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    if config.serverless {
        tracing::info!("Running on Vercel, skipping server listen");
        return Ok(());
    }

    let app = build_app(config).await;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Serving on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialises the database, then builds the router around it.
///
/// A database failure is logged and the app starts without one.
pub async fn build_app(config: &AppConfig) -> Router {
    let db = match initialize_database(config.database_url.as_deref()).await {
        Ok(db) => {
            tracing::info!("Database initialized successfully");
            Some(Arc::new(db))
        }
        Err(e) => {
            tracing::error!("Error initializing database: {}", e);
            None
        }
    };

    create_router(config, AppState { db })
}

pub fn create_router(config: &AppConfig, state: AppState) -> Router {
    create_router_with(config, handlers::register_routes().with_state(state))
}

/// Wraps an already-stated API router with static serving and middleware.
pub fn create_router_with(config: &AppConfig, api: Router) -> Router {
    let api = api.fallback_service(assets::client_assets(config));

    Router::new()
        .fallback_service(assets::serve_public(&config.public_dir, api))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(report_errors))
        .layer(from_fn(log_api_requests))
        .layer(from_fn(cors))
        .layer(TraceLayer::new_for_http())
}

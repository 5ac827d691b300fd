use axum::{routing::get, Router};

use crate::AppState;

pub mod health;
pub mod stock;

/// API routes, all under `/api`
pub fn register_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/stocks", get(stock::list_stocks))
        .route("/api/stocks/{symbol}", get(stock::get_stock))
        .route("/api/crypto", get(stock::list_cryptos))
}

// src/lib.rs

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    /// `None` when the database could not be initialised at startup
    pub db: Option<Arc<DatabaseConnection>>,
}

impl AppState {
    pub fn db(&self) -> Result<&DatabaseConnection, ApiError> {
        self.db
            .as_deref()
            .ok_or_else(|| ApiError::service_unavailable("Database unavailable"))
    }
}

pub mod entities {
    pub mod prelude;
    pub mod stocks;
}

pub mod models {
    pub mod stock;
}

pub mod services {
    pub mod crypto_seed;
    pub mod mock_cryptos;
    pub mod stock_repository;
}

pub mod app;
pub mod assets;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod serverless;

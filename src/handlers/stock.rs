use axum::{
    extract::{Path, Query, State},
    Json,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{prelude::*, stocks};
use crate::error::ApiError;
use crate::models::stock::{AssetClassification, StockListQuery, StockResponse};
use crate::AppState;

pub async fn list_stocks(
    State(state): State<AppState>,
    Query(query): Query<StockListQuery>,
) -> Result<Json<Vec<StockResponse>>, ApiError> {
    let classification = query.asset_type.map(AssetClassification::from);
    fetch_stocks(&state, classification).await.map(Json)
}

pub async fn list_cryptos(
    State(state): State<AppState>,
) -> Result<Json<Vec<StockResponse>>, ApiError> {
    fetch_stocks(&state, Some(AssetClassification::Crypto))
        .await
        .map(Json)
}

pub async fn get_stock(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<StockResponse>, ApiError> {
    let db = state.db()?;
    let symbol = symbol.to_uppercase();

    let stock = Stocks::find()
        .filter(stocks::Column::Symbol.eq(&symbol))
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Stock {} not found", symbol)))?;

    Ok(Json(StockResponse::from(stock)))
}

async fn fetch_stocks(
    state: &AppState,
    classification: Option<AssetClassification>,
) -> Result<Vec<StockResponse>, ApiError> {
    let db = state.db()?;

    let mut query = Stocks::find().order_by_asc(stocks::Column::Symbol);
    if let Some(classification) = classification {
        query = query.filter(stocks::Column::AssetType.eq(classification.as_str()));
    }

    let rows = query.all(db).await?;
    tracing::debug!("Fetched {} stocks", rows.len());

    Ok(rows.into_iter().map(StockResponse::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn row(id: i32, symbol: &str, asset_type: &str) -> stocks::Model {
        stocks::Model {
            id,
            symbol: symbol.to_string(),
            name: format!("{} name", symbol),
            exchange: "NASDAQ".to_string(),
            current_price: Decimal::new(10050, 2),
            previous_close: Decimal::new(10000, 2),
            change: Decimal::new(50, 2),
            change_percent: Decimal::new(50, 2),
            logo_url: None,
            sector: None,
            description: None,
            asset_type: asset_type.to_string(),
            sentiment_score: Some(0.1),
            sentiment_volume: Some(10),
            sentiment_trend: Some("neutral".to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    fn app(db: Option<DatabaseConnection>) -> axum::Router {
        crate::handlers::register_routes().with_state(AppState {
            db: db.map(Arc::new),
        })
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_stocks() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1, "AAPL", "stock"), row(2, "BTC", "crypto")]])
            .into_connection();

        let (status, body) = get(app(Some(db)), "/api/stocks").await;

        assert_eq!(status, StatusCode::OK);
        let stocks = body.as_array().unwrap();
        assert_eq!(stocks.len(), 2);
        assert_eq!(stocks[1]["symbol"], "BTC");
        assert_eq!(stocks[1]["assetType"], "crypto");
    }

    #[tokio::test]
    async fn test_get_stock_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<stocks::Model>::new()])
            .into_connection();

        let (status, body) = get(app(Some(db)), "/api/stocks/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Stock NOPE not found");
    }

    #[tokio::test]
    async fn test_get_stock() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(7, "ETH", "crypto")]])
            .into_connection();

        let (status, body) = get(app(Some(db)), "/api/stocks/eth").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 7);
        assert_eq!(body["currentPrice"], "100.50");
    }

    #[tokio::test]
    async fn test_without_database() {
        let (status, body) = get(app(None), "/api/crypto").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["message"], "Database unavailable");
    }

    #[tokio::test]
    async fn test_health_reports_database() {
        let (status, body) = get(app(None), "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], false);
    }
}

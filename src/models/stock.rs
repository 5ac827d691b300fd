use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::stocks;

/// Value of the `asset_type` column.
///
/// Unknown values are kept verbatim so a row written by another tool
/// round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetClassification {
    Stock,
    Crypto,
    Other(String),
}

impl AssetClassification {
    pub fn as_str(&self) -> &str {
        match self {
            AssetClassification::Stock => "stock",
            AssetClassification::Crypto => "crypto",
            AssetClassification::Other(value) => value,
        }
    }
}

impl From<&str> for AssetClassification {
    fn from(value: &str) -> Self {
        match value {
            "stock" => AssetClassification::Stock,
            "crypto" => AssetClassification::Crypto,
            other => AssetClassification::Other(other.to_string()),
        }
    }
}

impl From<String> for AssetClassification {
    fn from(value: String) -> Self {
        AssetClassification::from(value.as_str())
    }
}

impl fmt::Display for AssetClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentTrend {
    Bullish,
    Bearish,
    Neutral,
    Mixed,
}

impl SentimentTrend {
    pub const ALL: [SentimentTrend; 4] = [
        SentimentTrend::Bullish,
        SentimentTrend::Bearish,
        SentimentTrend::Neutral,
        SentimentTrend::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentTrend::Bullish => "bullish",
            SentimentTrend::Bearish => "bearish",
            SentimentTrend::Neutral => "neutral",
            SentimentTrend::Mixed => "mixed",
        }
    }
}

/// A cryptocurrency from the static seed list.
#[derive(Debug, Clone)]
pub struct CandidateAsset {
    pub symbol: &'static str,
    pub name: &'static str,
    pub exchange: &'static str,
    pub current_price: Decimal,
    pub previous_close: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub logo_url: &'static str,
    pub description: Option<&'static str>,
}

/// Fully populated row for `insert_asset`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAsset {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    pub current_price: Decimal,
    pub previous_close: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub logo_url: Option<String>,
    pub sector: Option<String>,
    pub description: Option<String>,
    pub asset_type: AssetClassification,
    pub sentiment_score: f64,
    pub sentiment_volume: i32,
    pub sentiment_trend: SentimentTrend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockResponse {
    pub id: i32,
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    pub current_price: Decimal,
    pub previous_close: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub logo_url: Option<String>,
    pub sector: Option<String>,
    pub description: Option<String>,
    pub asset_type: String,
    pub sentiment_score: Option<f64>,
    pub sentiment_volume: Option<i32>,
    pub sentiment_trend: Option<String>,
}

impl From<stocks::Model> for StockResponse {
    fn from(model: stocks::Model) -> Self {
        Self {
            id: model.id,
            symbol: model.symbol,
            name: model.name,
            exchange: model.exchange,
            current_price: model.current_price,
            previous_close: model.previous_close,
            change: model.change,
            change_percent: model.change_percent,
            logo_url: model.logo_url,
            sector: model.sector,
            description: model.description,
            asset_type: model.asset_type,
            sentiment_score: model.sentiment_score,
            sentiment_volume: model.sentiment_volume,
            sentiment_trend: model.sentiment_trend,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockListQuery {
    pub asset_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: bool,
}

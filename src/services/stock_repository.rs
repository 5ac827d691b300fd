//! Typed access to the `stocks` table used by the seed routine.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QuerySelect, Set, SqlErr,
};

use crate::entities::{prelude::*, stocks};
use crate::models::stock::{AssetClassification, NewAsset};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("No stock with symbol {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(String),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail))
            | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                return RepositoryError::ConstraintViolation(detail);
            }
            _ => {}
        }

        match err {
            DbErr::Conn(e) => RepositoryError::Connection(e.to_string()),
            DbErr::ConnectionAcquire(e) => RepositoryError::Connection(e.to_string()),
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Symbol -> classification for every row, in one query
    async fn find_all_asset_classifications(
        &self,
    ) -> Result<HashMap<String, AssetClassification>, RepositoryError>;

    async fn insert_asset(&self, asset: NewAsset) -> Result<(), RepositoryError>;

    /// Only touches `asset_type`
    async fn update_classification(
        &self,
        symbol: &str,
        classification: AssetClassification,
    ) -> Result<(), RepositoryError>;
}

#[derive(Debug, FromQueryResult)]
struct ClassificationRow {
    symbol: String,
    asset_type: String,
}

pub struct SeaOrmStockRepository {
    db: DatabaseConnection,
}

impl SeaOrmStockRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StockRepository for SeaOrmStockRepository {
    async fn find_all_asset_classifications(
        &self,
    ) -> Result<HashMap<String, AssetClassification>, RepositoryError> {
        let rows = Stocks::find()
            .select_only()
            .column(stocks::Column::Symbol)
            .column(stocks::Column::AssetType)
            .into_model::<ClassificationRow>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.symbol, AssetClassification::from(row.asset_type)))
            .collect())
    }

    async fn insert_asset(&self, asset: NewAsset) -> Result<(), RepositoryError> {
        let new_stock = stocks::ActiveModel {
            symbol: Set(asset.symbol),
            name: Set(asset.name),
            exchange: Set(asset.exchange),
            current_price: Set(asset.current_price),
            previous_close: Set(asset.previous_close),
            change: Set(asset.change),
            change_percent: Set(asset.change_percent),
            logo_url: Set(asset.logo_url),
            sector: Set(asset.sector),
            description: Set(asset.description),
            asset_type: Set(asset.asset_type.as_str().to_string()),
            sentiment_score: Set(Some(asset.sentiment_score)),
            sentiment_volume: Set(Some(asset.sentiment_volume)),
            sentiment_trend: Set(Some(asset.sentiment_trend.as_str().to_string())),
            ..Default::default()
        };

        Stocks::insert(new_stock)
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    async fn update_classification(
        &self,
        symbol: &str,
        classification: AssetClassification,
    ) -> Result<(), RepositoryError> {
        let result = Stocks::update_many()
            .col_expr(
                stocks::Column::AssetType,
                Expr::value(classification.as_str().to_string()),
            )
            .filter(stocks::Column::Symbol.eq(symbol))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound(symbol.to_string()));
        }

        Ok(())
    }
}

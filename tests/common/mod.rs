use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use stocktracker_backend::models::stock::{AssetClassification, NewAsset};
use stocktracker_backend::services::stock_repository::{RepositoryError, StockRepository};

/// In-memory stand-in for the `stocks` table, keyed by symbol
#[derive(Default)]
pub struct InMemoryStockRepository {
    pub rows: Mutex<HashMap<String, NewAsset>>,
    pub failing_symbols: HashSet<String>,
}

impl InMemoryStockRepository {
    pub async fn with_rows(rows: Vec<NewAsset>) -> Self {
        let repo = Self::default();
        {
            let mut table = repo.rows.lock().await;
            for row in rows {
                table.insert(row.symbol.clone(), row);
            }
        }
        repo
    }

    pub async fn row(&self, symbol: &str) -> Option<NewAsset> {
        self.rows.lock().await.get(symbol).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }
}

#[async_trait]
impl StockRepository for InMemoryStockRepository {
    async fn find_all_asset_classifications(
        &self,
    ) -> Result<HashMap<String, AssetClassification>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .map(|(symbol, row)| (symbol.clone(), row.asset_type.clone()))
            .collect())
    }

    async fn insert_asset(&self, asset: NewAsset) -> Result<(), RepositoryError> {
        if self.failing_symbols.contains(&asset.symbol) {
            return Err(RepositoryError::Connection("connection reset".to_string()));
        }

        let mut rows = self.rows.lock().await;
        if rows.contains_key(&asset.symbol) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "duplicate symbol {}",
                asset.symbol
            )));
        }
        rows.insert(asset.symbol.clone(), asset);
        Ok(())
    }

    async fn update_classification(
        &self,
        symbol: &str,
        classification: AssetClassification,
    ) -> Result<(), RepositoryError> {
        if self.failing_symbols.contains(symbol) {
            return Err(RepositoryError::Connection("connection reset".to_string()));
        }

        match self.rows.lock().await.get_mut(symbol) {
            Some(row) => {
                row.asset_type = classification;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(symbol.to_string())),
        }
    }
}

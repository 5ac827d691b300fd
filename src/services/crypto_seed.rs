//! Reconciles the static cryptocurrency list against the `stocks` table.
//!
//! Every candidate ends up present with classification `crypto`: missing
//! symbols are inserted, misclassified rows get their `asset_type`
//! corrected and rows that are already right are skipped. A failure on one
//! candidate is logged and the loop moves on.

use rand::Rng;

use crate::models::stock::{AssetClassification, CandidateAsset, NewAsset, SentimentTrend};
use crate::services::stock_repository::{RepositoryError, StockRepository};

pub const CRYPTO_SECTOR: &str = "Cryptocurrency";

/// Upper bound (exclusive) of the generated sentiment volume
pub const MAX_SENTIMENT_VOLUME: i32 = 10_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub added: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.added + self.updated + self.skipped + self.failed
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentSample {
    pub score: f64,
    pub volume: i32,
    pub trend: SentimentTrend,
}

impl SentimentSample {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let score = rng.random_range(-1.0..1.0);
        let volume = rng.random_range(0..MAX_SENTIMENT_VOLUME);
        let trend = SentimentTrend::ALL[rng.random_range(0..SentimentTrend::ALL.len())];

        Self {
            score,
            volume,
            trend,
        }
    }
}

/// Parses a fixed sentiment seed. An unparsable value is logged and ignored,
/// so the caller falls back to an OS-seeded generator.
pub fn parse_sentiment_seed(raw: Option<&str>) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(err) => {
            tracing::warn!(
                "cannot parse `SEED_RNG_SEED` value {:?}: {}. using a random seed",
                raw,
                err
            );
            None
        }
    }
}

fn new_asset_from_candidate(candidate: &CandidateAsset, sentiment: SentimentSample) -> NewAsset {
    let description = candidate
        .description
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} cryptocurrency", candidate.name));

    NewAsset {
        symbol: candidate.symbol.to_string(),
        name: candidate.name.to_string(),
        exchange: candidate.exchange.to_string(),
        current_price: candidate.current_price,
        previous_close: candidate.previous_close,
        change: candidate.change,
        change_percent: candidate.change_percent,
        logo_url: Some(candidate.logo_url.to_string()),
        sector: Some(CRYPTO_SECTOR.to_string()),
        description: Some(description),
        asset_type: AssetClassification::Crypto,
        sentiment_score: sentiment.score,
        sentiment_volume: sentiment.volume,
        sentiment_trend: sentiment.trend,
    }
}

/// Runs the reconciliation. Only the initial bulk read can fail the run.
pub async fn seed_cryptos<P, R>(
    repo: &P,
    candidates: &[CandidateAsset],
    rng: &mut R,
) -> Result<SeedSummary, RepositoryError>
where
    P: StockRepository + ?Sized,
    R: Rng + ?Sized,
{
    tracing::info!(
        "Starting to add {} cryptocurrencies to the database",
        candidates.len()
    );

    let existing = repo.find_all_asset_classifications().await?;
    let mut summary = SeedSummary::default();

    for candidate in candidates {
        match existing.get(candidate.symbol) {
            None => {
                let sentiment = SentimentSample::generate(&mut *rng);
                let asset = new_asset_from_candidate(candidate, sentiment);

                match repo.insert_asset(asset).await {
                    Ok(()) => {
                        tracing::info!(
                            "Added {} ({}) to the database",
                            candidate.symbol,
                            candidate.name
                        );
                        summary.added += 1;
                    }
                    Err(e) => {
                        tracing::error!("Error adding {}: {}", candidate.symbol, e);
                        summary.failed += 1;
                    }
                }
            }
            Some(AssetClassification::Crypto) => {
                summary.skipped += 1;
            }
            Some(current) => {
                match repo
                    .update_classification(candidate.symbol, AssetClassification::Crypto)
                    .await
                {
                    Ok(()) => {
                        tracing::info!(
                            "Updated {} asset_type from '{}' to 'crypto'",
                            candidate.symbol,
                            current
                        );
                        summary.updated += 1;
                    }
                    Err(e) => {
                        tracing::error!("Error updating {}: {}", candidate.symbol, e);
                        summary.failed += 1;
                    }
                }
            }
        }
    }

    tracing::info!(
        "Crypto seed complete: {} added, {} updated, {} skipped, {} failed",
        summary.added,
        summary.updated,
        summary.skipped,
        summary.failed
    );

    Ok(summary)
}

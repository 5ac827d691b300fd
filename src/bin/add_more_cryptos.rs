use std::env;

use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stocktracker_backend::config::AppConfig;
use stocktracker_backend::db::initialize_database;
use stocktracker_backend::services::crypto_seed::{
    parse_sentiment_seed, seed_cryptos, SeedSummary,
};
use stocktracker_backend::services::mock_cryptos::mock_cryptos;
use stocktracker_backend::services::stock_repository::SeaOrmStockRepository;

/// Adds the cryptocurrencies from the mock list to the database.
///
/// Always exits 0 once it has run, whether or not the run succeeded.
#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,stocktracker_backend=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(summary) => print_summary(&summary),
        Err(e) => tracing::error!("Error adding cryptocurrencies to the database: {:#}", e),
    }

    std::process::exit(0);
}

async fn run() -> anyhow::Result<SeedSummary> {
    let config = AppConfig::from_env();
    let db = initialize_database(config.database_url.as_deref()).await?;

    let seed = parse_sentiment_seed(env::var("SEED_RNG_SEED").ok().as_deref());
    let mut rng = match seed {
        Some(seed) => {
            tracing::info!("Using fixed sentiment seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let repo = SeaOrmStockRepository::new(db);
    let summary = seed_cryptos(&repo, &mock_cryptos(), &mut rng).await?;

    Ok(summary)
}

fn print_summary(summary: &SeedSummary) {
    println!("\n=== Summary ===");
    println!("Added:   {} new cryptocurrencies", summary.added);
    println!("Updated: {} existing cryptocurrencies", summary.updated);
    println!(
        "Skipped: {} cryptocurrencies (already exist with correct asset_type)",
        summary.skipped
    );
    println!("Failed:  {}", summary.failed);
    println!("Total:   {} cryptocurrencies processed", summary.total());
}

use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// Connects and applies pending migrations.
pub async fn initialize_database(database_url: Option<&str>) -> Result<DatabaseConnection, DbErr> {
    let database_url = database_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| DbErr::Custom("DATABASE_URL is not set".to_string()))?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(database_url).await?;

    tracing::info!("Running migrations...");
    migration::Migrator::up(&db, None).await?;

    Ok(db)
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stocks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stocks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Stocks::Symbol)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Stocks::Name).string().not_null())
                    .col(ColumnDef::new(Stocks::Exchange).string().not_null())
                    .col(ColumnDef::new(Stocks::CurrentPrice).decimal().not_null())
                    .col(ColumnDef::new(Stocks::PreviousClose).decimal().not_null())
                    .col(ColumnDef::new(Stocks::Change).decimal().not_null())
                    .col(ColumnDef::new(Stocks::ChangePercent).decimal().not_null())
                    .col(ColumnDef::new(Stocks::LogoUrl).string().null())
                    .col(ColumnDef::new(Stocks::Sector).string().null())
                    .col(ColumnDef::new(Stocks::Description).text().null())
                    .col(
                        ColumnDef::new(Stocks::AssetType)
                            .string_len(16)
                            .not_null()
                            .default("stock"),
                    )
                    .col(ColumnDef::new(Stocks::SentimentScore).double().null())
                    .col(ColumnDef::new(Stocks::SentimentVolume).integer().null())
                    .col(ColumnDef::new(Stocks::SentimentTrend).string_len(16).null())
                    .col(
                        ColumnDef::new(Stocks::CreatedAt)
                            .timestamp()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(Stocks::UpdatedAt)
                            .timestamp()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing endpoints filter on the classification
        manager
            .create_index(
                Index::create()
                    .name("idx_stocks_asset_type")
                    .table(Stocks::Table)
                    .col(Stocks::AssetType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stocks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Stocks {
    Table,
    Id,
    Symbol,
    Name,
    Exchange,
    CurrentPrice,
    PreviousClose,
    Change,
    ChangePercent,
    LogoUrl,
    Sector,
    Description,
    AssetType,
    SentimentScore,
    SentimentVolume,
    SentimentTrend,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Deck::Table)
                    .if_not_exists()
                    .col(string_len(Deck::Id, 32).primary_key())
                    .col(string_len(Deck::Name, 100))
                    .col(string_len(Deck::NameKey, 100))
                    .col(text(Deck::Description))
                    .col(text(Deck::DescriptionKey))
                    .col(string(Deck::Colors))
                    .col(string_len(Deck::TierRating, 1))
                    .col(string_len(Deck::DeckType, 16))
                    .col(string_len(Deck::GameStage, 16))
                    .col(boolean(Deck::HasCardSleeves))
                    .col(boolean(Deck::IsComplete))
                    .col(string_len(Deck::StorageLocation, 100))
                    .col(string_len(Deck::StorageLocationKey, 100))
                    .col(string_len_null(Deck::Planeswalker, 50))
                    .col(string_len_null(Deck::PlaneswalkerKey, 50))
                    .col(string_null(Deck::DescriptiveImage))
                    .col(timestamp_with_time_zone(Deck::CreatedAt))
                    .col(timestamp_with_time_zone(Deck::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deck::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Deck {
    Table,
    Id,
    Name,
    NameKey,
    Description,
    DescriptionKey,
    Colors,
    TierRating,
    DeckType,
    GameStage,
    HasCardSleeves,
    IsComplete,
    StorageLocation,
    StorageLocationKey,
    Planeswalker,
    PlaneswalkerKey,
    DescriptiveImage,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_deck_table::Deck;

/// Name of the unique index that guards case-insensitive name collisions.
const NAME_KEY_INDEX: &str = "idx_deck_name_key";

const SECONDARY_INDEXES: [(&str, Deck); 5] = [
    ("idx_deck_tier_rating", Deck::TierRating),
    ("idx_deck_deck_type", Deck::DeckType),
    ("idx_deck_game_stage", Deck::GameStage),
    ("idx_deck_is_complete", Deck::IsComplete),
    ("idx_deck_created_at", Deck::CreatedAt),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(NAME_KEY_INDEX)
                    .table(Deck::Table)
                    .col(Deck::NameKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        for (name, column) in SECONDARY_INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Deck::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, _) in SECONDARY_INDEXES {
            manager
                .drop_index(Index::drop().name(name).table(Deck::Table).to_owned())
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(NAME_KEY_INDEX)
                    .table(Deck::Table)
                    .to_owned(),
            )
            .await
    }
}

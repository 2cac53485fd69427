//! Deck factory for inserting test deck rows.
//!
//! Rows are written straight through the entity, bypassing the server's validation, so
//! tests can seed exactly the state they need.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{deck_id, next_id};
use crate::fixture;

/// Factory for creating test decks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::deck::DeckFactory;
///
/// let deck = DeckFactory::new(&db)
///     .name("Mono Red Burn")
///     .tier_rating("S")
///     .build()
///     .await?;
/// ```
pub struct DeckFactory<'a> {
    db: &'a DatabaseConnection,
    builder: fixture::deck::DeckEntityBuilder,
}

impl<'a> DeckFactory<'a> {
    /// Creates a new DeckFactory with default values from fixture.
    ///
    /// Defaults are sourced from `fixture::deck::entity_builder()` with a unique id and
    /// a unique name of the form `"Deck {n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let builder = fixture::deck::entity_builder()
            .id(deck_id(id))
            .name(format!("Deck {}", id))
            .created_at(Utc::now());

        Self { db, builder }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.builder = self.builder.name(name);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.builder = self.builder.description(description);
        self
    }

    pub fn colors(mut self, colors: &[&str]) -> Self {
        self.builder = self.builder.colors(colors);
        self
    }

    pub fn tier_rating(mut self, tier_rating: impl Into<String>) -> Self {
        self.builder = self.builder.tier_rating(tier_rating);
        self
    }

    pub fn deck_type(mut self, deck_type: impl Into<String>) -> Self {
        self.builder = self.builder.deck_type(deck_type);
        self
    }

    pub fn game_stage(mut self, game_stage: impl Into<String>) -> Self {
        self.builder = self.builder.game_stage(game_stage);
        self
    }

    pub fn has_card_sleeves(mut self, has_card_sleeves: bool) -> Self {
        self.builder = self.builder.has_card_sleeves(has_card_sleeves);
        self
    }

    pub fn is_complete(mut self, is_complete: bool) -> Self {
        self.builder = self.builder.is_complete(is_complete);
        self
    }

    pub fn storage_location(mut self, storage_location: impl Into<String>) -> Self {
        self.builder = self.builder.storage_location(storage_location);
        self
    }

    pub fn planeswalker(mut self, planeswalker: Option<&str>) -> Self {
        self.builder = self.builder.planeswalker(planeswalker);
        self
    }

    /// Sets the creation timestamp, useful for asserting sort order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.builder = self.builder.created_at(created_at);
        self
    }

    /// Builds and inserts the deck entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::deck::Model)` - Created deck entity
    /// - `Err(DbErr)` - Database error during insert (including unique `name_key` violations)
    pub async fn build(self) -> Result<entity::deck::Model, DbErr> {
        let model = self.builder.build();

        entity::deck::ActiveModel {
            id: ActiveValue::Set(model.id),
            name: ActiveValue::Set(model.name),
            name_key: ActiveValue::Set(model.name_key),
            description: ActiveValue::Set(model.description),
            description_key: ActiveValue::Set(model.description_key),
            colors: ActiveValue::Set(model.colors),
            tier_rating: ActiveValue::Set(model.tier_rating),
            deck_type: ActiveValue::Set(model.deck_type),
            game_stage: ActiveValue::Set(model.game_stage),
            has_card_sleeves: ActiveValue::Set(model.has_card_sleeves),
            is_complete: ActiveValue::Set(model.is_complete),
            storage_location: ActiveValue::Set(model.storage_location),
            storage_location_key: ActiveValue::Set(model.storage_location_key),
            planeswalker: ActiveValue::Set(model.planeswalker),
            planeswalker_key: ActiveValue::Set(model.planeswalker_key),
            descriptive_image: ActiveValue::Set(model.descriptive_image),
            created_at: ActiveValue::Set(model.created_at),
            updated_at: ActiveValue::Set(model.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a deck with default values.
///
/// Shorthand for `DeckFactory::new(db).build().await`.
pub async fn create_deck(db: &DatabaseConnection) -> Result<entity::deck::Model, DbErr> {
    DeckFactory::new(db).build().await
}

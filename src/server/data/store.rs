use async_trait::async_trait;

use crate::server::{
    error::AppError,
    model::{
        deck::{Deck, NewDeck, UpdateDeckParams},
        query::{DeckFilter, PaginatedDecks, Pagination},
        symbol::{Color, DeckType, TierRating},
    },
};

/// Storage contract for deck records.
///
/// Identifiers are passed as raw strings; a value that is not a well-formed deck id
/// simply matches nothing. Implementations must enforce case-insensitive name uniqueness
/// themselves and report a collision as `AppError::Conflict`, since callers' pre-checks
/// can race with concurrent writers.
#[async_trait]
pub trait DeckStore: Send + Sync {
    /// Persists a validated draft under a fresh id with both timestamps set to now.
    async fn create(&self, draft: NewDeck) -> Result<Deck, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Deck>, AppError>;

    /// Returns one page of decks matching every predicate of `filter`.
    async fn find_all(
        &self,
        filter: &DeckFilter,
        pagination: &Pagination,
    ) -> Result<PaginatedDecks, AppError>;

    /// Merges `patch` into the stored deck; `Ok(None)` if no deck has this id.
    async fn update(&self, id: &str, patch: &UpdateDeckParams) -> Result<Option<Deck>, AppError>;

    /// Returns whether a deck was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Exact, case-insensitive name lookup.
    async fn find_by_name(&self, name: &str) -> Result<Option<Deck>, AppError>;

    async fn find_by_tier(&self, tier_rating: TierRating) -> Result<Vec<Deck>, AppError>;

    async fn find_by_type(&self, deck_type: DeckType) -> Result<Vec<Deck>, AppError>;

    /// Case-insensitive substring match on the storage location.
    async fn find_by_storage_location(&self, location: &str) -> Result<Vec<Deck>, AppError>;

    /// Relevance-ranked keyword search over name, planeswalker and description.
    async fn search(&self, keyword: &str) -> Result<Vec<Deck>, AppError>;

    /// Decks containing at least one of `colors`.
    async fn find_by_colors(&self, colors: &[Color]) -> Result<Vec<Deck>, AppError>;

    async fn count(&self, filter: &DeckFilter) -> Result<u64, AppError>;

    /// Decks still missing cards, newest first.
    async fn find_incomplete(&self) -> Result<Vec<Deck>, AppError>;
}

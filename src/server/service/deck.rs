use std::sync::Arc;

use crate::server::{
    data::store::DeckStore,
    error::AppError,
    model::{
        deck::{name_key, CreateDeckParams, Deck, NewDeck, UpdateDeckParams},
        query::{DeckFilter, PaginatedDecks, Pagination},
        symbol::{Color, DeckType, TierRating},
    },
};

/// Deck use cases on top of a `DeckStore`.
///
/// Cloning is cheap; every clone shares the same store.
#[derive(Clone)]
pub struct DeckService {
    store: Arc<dyn DeckStore>,
}

impl DeckService {
    pub fn new(store: Arc<dyn DeckStore>) -> Self {
        Self { store }
    }

    /// Creates a deck after checking that its name is free.
    ///
    /// The pre-check gives a clear conflict for the common case; the store's unique
    /// index still rejects a concurrent create that slips past it.
    ///
    /// # Returns
    /// - `Ok(Deck)` - The stored deck
    /// - `Err(AppError::Conflict)` - A deck with the same name exists, ignoring case
    /// - `Err(AppError::Validation)` - The parameters break a deck rule
    pub async fn create_deck(&self, params: CreateDeckParams) -> Result<Deck, AppError> {
        if let Some(existing) = self.store.find_by_name(&params.name).await? {
            return Err(duplicate_name(&existing.name));
        }

        let draft = NewDeck::new(params)?;
        let deck = self.store.create(draft).await?;

        tracing::info!("Created deck {} ({})", deck.id, deck.name);

        Ok(deck)
    }

    pub async fn get_deck_by_id(&self, id: &str) -> Result<Option<Deck>, AppError> {
        tracing::debug!("Fetching deck {}", id);

        self.store.find_by_id(id).await
    }

    pub async fn get_all_decks(
        &self,
        filter: DeckFilter,
        pagination: Pagination,
    ) -> Result<PaginatedDecks, AppError> {
        tracing::debug!("Listing decks {:?} {:?}", filter, pagination);

        self.store.find_all(&filter, &pagination).await
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Deck)` - The updated deck
    /// - `Err(AppError::NotFound)` - No deck has this id, including one deleted while
    ///   the update was in flight
    /// - `Err(AppError::Conflict)` - The new name belongs to another deck
    /// - `Err(AppError::Validation)` - The merged deck breaks a deck rule
    pub async fn update_deck(&self, id: &str, patch: UpdateDeckParams) -> Result<Deck, AppError> {
        let current = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| deck_not_found(id))?;

        if let Some(name) = &patch.name {
            if name_key(name) != current.name_key() {
                if let Some(existing) = self.store.find_by_name(name).await? {
                    if existing.id != current.id {
                        return Err(duplicate_name(&existing.name));
                    }
                }
            }
        }

        let deck = self
            .store
            .update(id, &patch)
            .await?
            .ok_or_else(|| deck_not_found(id))?;

        tracing::info!("Updated deck {} ({})", deck.id, deck.name);

        Ok(deck)
    }

    pub async fn delete_deck(&self, id: &str) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(deck_not_found(id));
        }

        tracing::info!("Deleted deck {}", id);

        Ok(())
    }

    pub async fn search_decks(&self, keyword: &str) -> Result<Vec<Deck>, AppError> {
        tracing::debug!("Searching decks for '{}'", keyword);

        self.store.search(keyword).await
    }

    pub async fn get_incomplete_decks(&self) -> Result<Vec<Deck>, AppError> {
        self.store.find_incomplete().await
    }

    pub async fn get_decks_by_storage_location(
        &self,
        location: &str,
    ) -> Result<Vec<Deck>, AppError> {
        tracing::debug!("Fetching decks stored at '{}'", location);

        self.store.find_by_storage_location(location).await
    }

    pub async fn get_decks_by_tier(&self, tier_rating: TierRating) -> Result<Vec<Deck>, AppError> {
        self.store.find_by_tier(tier_rating).await
    }

    pub async fn get_decks_by_type(&self, deck_type: DeckType) -> Result<Vec<Deck>, AppError> {
        self.store.find_by_type(deck_type).await
    }

    pub async fn get_decks_by_colors(&self, colors: &[Color]) -> Result<Vec<Deck>, AppError> {
        self.store.find_by_colors(colors).await
    }

    pub async fn count_decks(&self, filter: DeckFilter) -> Result<u64, AppError> {
        self.store.count(&filter).await
    }
}

fn deck_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Deck with id '{}' not found", id))
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!("Deck with name '{}' already exists", name))
}

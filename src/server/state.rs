//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned for each request through Axum's
//! state extraction. It only carries the deck service; the database connection lives
//! inside the service's store.

use crate::server::service::deck::DeckService;

/// Application state containing shared services.
///
/// Cloning is cheap: `DeckService` holds its store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub deck_service: DeckService,
}

impl AppState {
    pub fn new(deck_service: DeckService) -> Self {
        Self { deck_service }
    }
}

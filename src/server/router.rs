use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorCode, ErrorDetailDto, ErrorDto, PaginationDto},
        deck::{CountDto, CreateDeckDto, DeckDto, UpdateDeckDto},
    },
    server::{
        controller::{deck, health},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        deck::create_deck,
        deck::get_decks,
        deck::get_deck_by_id,
        deck::update_deck,
        deck::delete_deck,
        deck::search_decks,
        deck::get_incomplete_decks,
        deck::get_decks_by_location,
        deck::get_decks_by_tier,
        deck::get_decks_by_type,
        deck::get_decks_by_colors,
        deck::count_decks,
    ),
    components(schemas(
        DeckDto,
        CreateDeckDto,
        UpdateDeckDto,
        CountDto,
        PaginationDto,
        ErrorDto,
        ErrorDetailDto,
        ErrorCode,
    )),
    info(
        title = "Deck Vault API",
        description = "Stores and queries card-game deck records"
    )
)]
pub struct ApiDoc;

/// Builds every route of the API, including the served OpenAPI document.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/decks", get(deck::get_decks).post(deck::create_deck))
        .route("/decks/search/keyword", get(deck::search_decks))
        .route("/decks/filter/incomplete", get(deck::get_incomplete_decks))
        .route("/decks/filter/colors", get(deck::get_decks_by_colors))
        .route("/decks/stats/count", get(deck::count_decks))
        .route("/decks/location/{location}", get(deck::get_decks_by_location))
        .route("/decks/tier/{tier}", get(deck::get_decks_by_tier))
        .route("/decks/type/{deckType}", get(deck::get_decks_by_type))
        .route(
            "/decks/{id}",
            get(deck::get_deck_by_id)
                .put(deck::update_deck)
                .delete(deck::delete_deck),
        )
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        deck::{
            ColorsQuery, CountDto, CreateDeckDto, DeckDto, DeckListQuery, KeywordQuery,
            UpdateDeckDto,
        },
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::{
            deck::Deck,
            symbol::{DeckType, TierRating},
        },
        state::AppState,
        util::{
            parse::{non_blank, parse_deck_id, parse_symbol},
            validate::{
                validate_colors_query, validate_create_request, validate_filter_query,
                validate_keyword, validate_list_query, validate_update_request,
            },
        },
    },
};

/// Tag for grouping deck endpoints in OpenAPI documentation
pub static DECK_TAG: &str = "deck";

/// Unwraps a JSON body, turning a malformed or non-JSON body into a violation on `body`.
fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ValidationError::single("body", rejection.body_text()).into())
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| ValidationError::single("query", rejection.body_text()).into())
}

fn into_dtos(decks: Vec<Deck>) -> Vec<DeckDto> {
    decks.into_iter().map(Deck::into_dto).collect()
}

/// Create a new deck.
///
/// Validates the whole body before anything is stored; unknown fields such as `id` or
/// `createdAt` are ignored because the server assigns them. The stored name is
/// title-cased.
///
/// # Arguments
/// - `state` - Application state containing the deck service
/// - `payload` - Raw JSON body
///
/// # Returns
/// - `201 Created` - The stored deck
/// - `400 Bad Request` - One or more fields are invalid
/// - `409 Conflict` - A deck with the same name exists, ignoring case
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/decks",
    tag = DECK_TAG,
    request_body = CreateDeckDto,
    responses(
        (status = 201, description = "Deck created, wrapped in the response envelope", body = DeckDto),
        (status = 400, description = "Invalid deck data", body = ErrorDto),
        (status = 409, description = "Deck name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_deck(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = json_body(payload)?;
    let params = validate_create_request(&body)?;

    let deck = state.deck_service.create_deck(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(deck.into_dto()).with_message("Deck created successfully")),
    ))
}

/// List decks with filtering, sorting and pagination.
///
/// # Arguments
/// - `state` - Application state containing the deck service
/// - `query` - Filters plus `page`, `limit`, `sortBy` and `sortOrder`
///
/// # Returns
/// - `200 OK` - One page of decks with `pagination` metadata
/// - `400 Bad Request` - Unknown enum value, flag or sort option
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/decks",
    tag = DECK_TAG,
    params(DeckListQuery),
    responses(
        (status = 200, description = "Page of decks with pagination metadata", body = Vec<DeckDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_decks(
    State(state): State<AppState>,
    query: Result<Query<DeckListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = query_params(query)?;
    let (filter, pagination) = validate_list_query(&query)?;

    let page = state.deck_service.get_all_decks(filter, pagination).await?;
    let (decks, pagination) = page.into_dto();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(decks).with_pagination(pagination)),
    ))
}

/// Get a deck by id.
///
/// # Returns
/// - `200 OK` - The deck
/// - `400 Bad Request` - `id` is not 32 hexadecimal characters
/// - `404 Not Found` - No deck with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/decks/{id}",
    tag = DECK_TAG,
    params(
        ("id" = String, Path, description = "Deck id, 32 hexadecimal characters")
    ),
    responses(
        (status = 200, description = "Deck found", body = DeckDto),
        (status = 400, description = "Malformed deck id", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_deck_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_deck_id(&id)?;

    let deck = state
        .deck_service
        .get_deck_by_id(id.as_str())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Deck with id '{}' not found", id)))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(deck.into_dto()))))
}

/// Update a deck.
///
/// Only the fields present in the body change. `planeswalker` and `descriptiveImage`
/// can be cleared by sending `null`.
///
/// # Arguments
/// - `state` - Application state containing the deck service
/// - `id` - Deck id
/// - `payload` - Raw JSON body with at least one deck field
///
/// # Returns
/// - `200 OK` - The updated deck
/// - `400 Bad Request` - Malformed id, empty body or invalid fields
/// - `404 Not Found` - No deck with this id
/// - `409 Conflict` - The new name belongs to another deck
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/decks/{id}",
    tag = DECK_TAG,
    params(
        ("id" = String, Path, description = "Deck id, 32 hexadecimal characters")
    ),
    request_body = UpdateDeckDto,
    responses(
        (status = 200, description = "Deck updated", body = DeckDto),
        (status = 400, description = "Invalid deck id or data", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 409, description = "Deck name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_deck(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_deck_id(&id)?;
    let body = json_body(payload)?;
    let patch = validate_update_request(&body)?;

    let deck = state.deck_service.update_deck(id.as_str(), patch).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(deck.into_dto()).with_message("Deck updated successfully")),
    ))
}

/// Delete a deck.
///
/// # Returns
/// - `200 OK` - Deck deleted
/// - `400 Bad Request` - Malformed deck id
/// - `404 Not Found` - No deck with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/decks/{id}",
    tag = DECK_TAG,
    params(
        ("id" = String, Path, description = "Deck id, 32 hexadecimal characters")
    ),
    responses(
        (status = 200, description = "Deck deleted"),
        (status = 400, description = "Malformed deck id", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_deck(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_deck_id(&id)?;

    state.deck_service.delete_deck(id.as_str()).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Deck deleted successfully")),
    ))
}

/// Search decks by keyword.
///
/// Each whitespace-separated term is matched against name, planeswalker and
/// description. Results are ranked by relevance, name matches counting most.
#[utoipa::path(
    get,
    path = "/decks/search/keyword",
    tag = DECK_TAG,
    params(KeywordQuery),
    responses(
        (status = 200, description = "Matching decks, most relevant first", body = Vec<DeckDto>),
        (status = 400, description = "Keyword missing or blank", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_decks(
    State(state): State<AppState>,
    query: Result<Query<KeywordQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = query_params(query)?;
    let keyword = validate_keyword(&query)?;

    let decks = state.deck_service.search_decks(&keyword).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(into_dtos(decks)))))
}

/// List decks that are not complete yet, newest first.
#[utoipa::path(
    get,
    path = "/decks/filter/incomplete",
    tag = DECK_TAG,
    responses(
        (status = 200, description = "Incomplete decks", body = Vec<DeckDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_incomplete_decks(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let decks = state.deck_service.get_incomplete_decks().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(into_dtos(decks)))))
}

/// List decks whose storage location contains the given text, ignoring case.
#[utoipa::path(
    get,
    path = "/decks/location/{location}",
    tag = DECK_TAG,
    params(
        ("location" = String, Path, description = "Text to look for in the storage location")
    ),
    responses(
        (status = 200, description = "Decks stored at a matching location", body = Vec<DeckDto>),
        (status = 400, description = "Blank location", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_decks_by_location(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let location = non_blank(Some(location.as_str()))
        .ok_or_else(|| ValidationError::single("location", "location is required"))?;

    let decks = state
        .deck_service
        .get_decks_by_storage_location(location)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(into_dtos(decks)))))
}

/// List decks of one tier.
#[utoipa::path(
    get,
    path = "/decks/tier/{tier}",
    tag = DECK_TAG,
    params(
        ("tier" = String, Path, description = "S, A, B, C or D")
    ),
    responses(
        (status = 200, description = "Decks of the tier", body = Vec<DeckDto>),
        (status = 400, description = "Unknown tier", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_decks_by_tier(
    State(state): State<AppState>,
    Path(tier): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tier = parse_symbol::<TierRating>("tierRating", &tier)
        .map_err(|v| ValidationError::new(vec![v]))?;

    let decks = state.deck_service.get_decks_by_tier(tier).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(into_dtos(decks)))))
}

/// List decks of one type.
#[utoipa::path(
    get,
    path = "/decks/type/{deckType}",
    tag = DECK_TAG,
    params(
        ("deckType" = String, Path, description = "AGGRO, COMBO or CONTROL")
    ),
    responses(
        (status = 200, description = "Decks of the type", body = Vec<DeckDto>),
        (status = 400, description = "Unknown deck type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_decks_by_type(
    State(state): State<AppState>,
    Path(deck_type): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deck_type = parse_symbol::<DeckType>("deckType", &deck_type)
        .map_err(|v| ValidationError::new(vec![v]))?;

    let decks = state.deck_service.get_decks_by_type(deck_type).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(into_dtos(decks)))))
}

/// List decks containing any of the given colors.
#[utoipa::path(
    get,
    path = "/decks/filter/colors",
    tag = DECK_TAG,
    params(ColorsQuery),
    responses(
        (status = 200, description = "Decks with at least one of the colors", body = Vec<DeckDto>),
        (status = 400, description = "Missing or unknown color", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_decks_by_colors(
    State(state): State<AppState>,
    query: Result<Query<ColorsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = query_params(query)?;
    let colors = validate_colors_query(query.colors.as_deref())?;

    let decks = state.deck_service.get_decks_by_colors(&colors).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(into_dtos(decks)))))
}

/// Count decks matching the same filters the listing accepts.
///
/// Paging and sorting parameters are accepted and ignored.
#[utoipa::path(
    get,
    path = "/decks/stats/count",
    tag = DECK_TAG,
    params(DeckListQuery),
    responses(
        (status = 200, description = "Number of matching decks", body = CountDto),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_decks(
    State(state): State<AppState>,
    query: Result<Query<DeckListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = query_params(query)?;
    let filter = validate_filter_query(&query)?;

    let count = state.deck_service.count_decks(filter).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(CountDto { count }))))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A stored deck as returned by the API.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeckDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub colors: Vec<String>,
    pub tier_rating: String,
    pub deck_type: String,
    pub game_stage: String,
    pub has_card_sleeves: bool,
    pub is_complete: bool,
    pub storage_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planeswalker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptive_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a deck.
///
/// Handlers validate the raw JSON before it is turned into domain parameters, so this
/// type documents the accepted shape and is what API clients serialize.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeckDto {
    pub name: String,
    pub description: String,
    /// Color symbols from `W`, `U`, `B`, `R`, `G`, `C`.
    pub colors: Vec<String>,
    /// One of `S`, `A`, `B`, `C`, `D`.
    pub tier_rating: String,
    /// One of `AGGRO`, `COMBO`, `CONTROL`.
    pub deck_type: String,
    /// One of `EARLY`, `MID`, `LATE`.
    pub game_stage: String,
    pub has_card_sleeves: bool,
    pub is_complete: bool,
    pub storage_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planeswalker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptive_image: Option<String>,
}

/// Request body for a partial deck update. At least one field must be present;
/// `planeswalker` and `descriptiveImage` may be sent as `null` to clear them.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeckDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_card_sleeves: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planeswalker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptive_image: Option<String>,
}

/// Query string accepted by the deck listing and count endpoints.
///
/// Every value arrives as a raw string; parsing, clamping and enum checks happen in
/// `server::util::validate` so that a bad value produces a field violation instead of
/// an extractor rejection.
#[derive(Deserialize, Clone, Debug, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct DeckListQuery {
    /// Page number starting at 1 (default: 1)
    pub page: Option<String>,
    /// Items per page between 1 and 100 (default: 10)
    pub limit: Option<String>,
    /// name, createdAt, updatedAt, tierRating, deckType, gameStage or storageLocation
    pub sort_by: Option<String>,
    /// asc or desc (default: desc)
    pub sort_order: Option<String>,
    pub deck_type: Option<String>,
    pub game_stage: Option<String>,
    pub tier_rating: Option<String>,
    /// true or false
    pub is_complete: Option<String>,
    /// true or false
    pub has_card_sleeves: Option<String>,
    /// Case-insensitive substring of the storage location
    pub storage_location: Option<String>,
    /// Comma separated color symbols, matches decks containing any of them
    pub colors: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct KeywordQuery {
    /// Whitespace separated search terms
    pub keyword: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ColorsQuery {
    /// Comma separated color symbols, e.g. `W,U`
    pub colors: Option<String>,
}

/// Result of the deck count endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CountDto {
    pub count: u64,
}

//! Deck domain model and the rules every stored deck satisfies.
//!
//! `NewDeck::new` and `Deck::merge` are the only ways a deck's user-supplied fields are
//! produced, so both normalize (trim, title-case the name) and validate the same way.
//! Entity models are converted at the repository boundary with `Deck::from_entity`.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use sea_orm::DbErr;
use std::fmt;
use url::Url;

use crate::{
    model::deck::DeckDto,
    server::{
        error::validation::{FieldViolation, ValidationError},
        model::symbol::{Color, DeckType, GameStage, TierRating},
    },
};

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const STORAGE_LOCATION_MAX_LEN: usize = 100;
pub const PLANESWALKER_MAX_LEN: usize = 50;
pub const MAX_COLORS: usize = 5;
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Server-assigned deck identifier: 32 lowercase hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeckId(String);

impl DeckId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Accepts exactly 32 hex digits in either case and normalizes to lower case.
    pub fn parse(value: &str) -> Option<Self> {
        if value.len() == 32 && value.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(value.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collapses whitespace and capitalizes each word: `"lightning  aGGRO"` becomes
/// `"Lightning Aggro"`.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-folded name used for uniqueness.
pub fn name_key(name: &str) -> String {
    title_case(name).to_lowercase()
}

/// Lower-cased copy of a free-text field, matched against with substring queries.
pub fn search_key(text: &str) -> String {
    text.to_lowercase()
}

/// Returns true for an absolute http(s) URL whose path names an image file.
pub fn is_image_url(value: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return false;
    }

    url.path()
        .rsplit_once('.')
        .map(|(_, extension)| IMAGE_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Serializes colors the way the `colors` column stores them, e.g. `["W","U"]`.
pub fn encode_colors(colors: &[Color]) -> String {
    let symbols: Vec<String> = colors.iter().map(|c| format!("\"{}\"", c)).collect();
    format!("[{}]", symbols.join(","))
}

/// Text fragment present in the stored `colors` value iff the deck has `color`.
pub fn color_pattern(color: Color) -> String {
    format!("\"{}\"", color)
}

/// Fully parsed input for creating a deck, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDeckParams {
    pub name: String,
    pub description: String,
    pub colors: Vec<Color>,
    pub tier_rating: TierRating,
    pub deck_type: DeckType,
    pub game_stage: GameStage,
    pub has_card_sleeves: bool,
    pub is_complete: bool,
    pub storage_location: String,
    pub planeswalker: Option<String>,
    pub descriptive_image: Option<String>,
}

/// A validated deck that has not been stored yet.
///
/// Strings are trimmed, the name is title-cased and blank optional fields are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDeck {
    pub name: String,
    pub description: String,
    pub colors: Vec<Color>,
    pub tier_rating: TierRating,
    pub deck_type: DeckType,
    pub game_stage: GameStage,
    pub has_card_sleeves: bool,
    pub is_complete: bool,
    pub storage_location: String,
    pub planeswalker: Option<String>,
    pub descriptive_image: Option<String>,
}

impl NewDeck {
    /// Normalizes and validates creation parameters.
    ///
    /// # Returns
    /// - `Ok(NewDeck)` - All fields satisfy the deck rules
    /// - `Err(ValidationError)` - One violation per offending field
    pub fn new(params: CreateDeckParams) -> Result<Self, ValidationError> {
        let draft = Self {
            name: title_case(&params.name),
            description: params.description.trim().to_string(),
            colors: params.colors,
            tier_rating: params.tier_rating,
            deck_type: params.deck_type,
            game_stage: params.game_stage,
            has_card_sleeves: params.has_card_sleeves,
            is_complete: params.is_complete,
            storage_location: params.storage_location.trim().to_string(),
            planeswalker: normalize_optional(params.planeswalker),
            descriptive_image: normalize_optional(params.descriptive_image),
        };

        ValidationError::check(check_fields(
            &draft.name,
            &draft.description,
            &draft.colors,
            &draft.storage_location,
            draft.planeswalker.as_deref(),
            draft.descriptive_image.as_deref(),
        ))?;

        Ok(draft)
    }

    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    /// Stamps the draft with its identity; both timestamps start at `now`.
    pub fn into_deck(self, id: DeckId, now: DateTime<Utc>) -> Deck {
        Deck {
            id: id.into_string(),
            name: self.name,
            description: self.description,
            colors: self.colors,
            tier_rating: self.tier_rating,
            deck_type: self.deck_type,
            game_stage: self.game_stage,
            has_card_sleeves: self.has_card_sleeves,
            is_complete: self.is_complete,
            storage_location: self.storage_location,
            planeswalker: self.planeswalker,
            descriptive_image: self.descriptive_image,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a deck. `None` leaves a field untouched; for `planeswalker` and
/// `descriptive_image`, `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDeckParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub colors: Option<Vec<Color>>,
    pub tier_rating: Option<TierRating>,
    pub deck_type: Option<DeckType>,
    pub game_stage: Option<GameStage>,
    pub has_card_sleeves: Option<bool>,
    pub is_complete: Option<bool>,
    pub storage_location: Option<String>,
    pub planeswalker: Option<Option<String>>,
    pub descriptive_image: Option<Option<String>>,
}

/// A stored deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub id: String,
    pub name: String,
    pub description: String,
    pub colors: Vec<Color>,
    pub tier_rating: TierRating,
    pub deck_type: DeckType,
    pub game_stage: GameStage,
    pub has_card_sleeves: bool,
    pub is_complete: bool,
    pub storage_location: String,
    pub planeswalker: Option<String>,
    pub descriptive_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deck {
    /// Converts an entity model into the domain model.
    ///
    /// # Returns
    /// - `Ok(Deck)` - Every stored symbol parsed
    /// - `Err(DbErr::Type)` - The row holds a color, tier, type or stage outside the
    ///   known vocabulary, or `colors` is not a JSON array of strings
    pub fn from_entity(entity: entity::deck::Model) -> Result<Self, DbErr> {
        let corrupt = |err: String| DbErr::Type(format!("Corrupt deck {}: {}", entity.id, err));

        let symbols: Vec<String> =
            serde_json::from_str(&entity.colors).map_err(|e| corrupt(e.to_string()))?;
        let colors = symbols
            .iter()
            .map(|s| s.parse::<Color>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| corrupt(e.to_string()))?;
        let tier_rating = entity
            .tier_rating
            .parse::<TierRating>()
            .map_err(|e| corrupt(e.to_string()))?;
        let deck_type = entity
            .deck_type
            .parse::<DeckType>()
            .map_err(|e| corrupt(e.to_string()))?;
        let game_stage = entity
            .game_stage
            .parse::<GameStage>()
            .map_err(|e| corrupt(e.to_string()))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            colors,
            tier_rating,
            deck_type,
            game_stage,
            has_card_sleeves: entity.has_card_sleeves,
            is_complete: entity.is_complete,
            storage_location: entity.storage_location,
            planeswalker: entity.planeswalker,
            descriptive_image: entity.descriptive_image,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> DeckDto {
        DeckDto {
            id: self.id,
            name: self.name,
            description: self.description,
            colors: self.colors.iter().map(|c| c.to_string()).collect(),
            tier_rating: self.tier_rating.to_string(),
            deck_type: self.deck_type.to_string(),
            game_stage: self.game_stage.to_string(),
            has_card_sleeves: self.has_card_sleeves,
            is_complete: self.is_complete,
            storage_location: self.storage_location,
            planeswalker: self.planeswalker,
            descriptive_image: self.descriptive_image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    /// Applies `patch` on top of this deck and returns the result without touching
    /// `self`.
    ///
    /// The merged deck goes through the same normalization and validation as a new one.
    /// `id` and `created_at` are carried over; `updated_at` becomes `now`, or one
    /// millisecond past the previous value if the clock has not moved forward.
    pub fn merge(&self, patch: &UpdateDeckParams, now: DateTime<Utc>) -> Result<Deck, ValidationError> {
        let mut merged = self.clone();

        if let Some(name) = &patch.name {
            merged.name = title_case(name);
        }
        if let Some(description) = &patch.description {
            merged.description = description.trim().to_string();
        }
        if let Some(colors) = &patch.colors {
            merged.colors = colors.clone();
        }
        if let Some(tier_rating) = patch.tier_rating {
            merged.tier_rating = tier_rating;
        }
        if let Some(deck_type) = patch.deck_type {
            merged.deck_type = deck_type;
        }
        if let Some(game_stage) = patch.game_stage {
            merged.game_stage = game_stage;
        }
        if let Some(has_card_sleeves) = patch.has_card_sleeves {
            merged.has_card_sleeves = has_card_sleeves;
        }
        if let Some(is_complete) = patch.is_complete {
            merged.is_complete = is_complete;
        }
        if let Some(storage_location) = &patch.storage_location {
            merged.storage_location = storage_location.trim().to_string();
        }
        if let Some(planeswalker) = &patch.planeswalker {
            merged.planeswalker = normalize_optional(planeswalker.clone());
        }
        if let Some(descriptive_image) = &patch.descriptive_image {
            merged.descriptive_image = normalize_optional(descriptive_image.clone());
        }

        ValidationError::check(check_fields(
            &merged.name,
            &merged.description,
            &merged.colors,
            &merged.storage_location,
            merged.planeswalker.as_deref(),
            merged.descriptive_image.as_deref(),
        ))?;

        merged.updated_at = next_timestamp(self.updated_at, now);

        Ok(merged)
    }

    /// Keyword relevance: for every term, 3 if it occurs in the name, 2 if in the
    /// planeswalker and 1 if in the description. Terms must already be lower case.
    pub fn relevance(&self, terms: &[String]) -> u32 {
        let name = self.name.to_lowercase();
        let description = self.description.to_lowercase();
        let planeswalker = self
            .planeswalker
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();

        terms
            .iter()
            .map(|term| {
                let mut score = 0;
                if name.contains(term.as_str()) {
                    score += 3;
                }
                if !planeswalker.is_empty() && planeswalker.contains(term.as_str()) {
                    score += 2;
                }
                if description.contains(term.as_str()) {
                    score += 1;
                }
                score
            })
            .sum()
    }
}

/// Current time at the millisecond precision decks are compared with.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn next_timestamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    now.max(previous + Duration::milliseconds(1))
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_fields(
    name: &str,
    description: &str,
    colors: &[Color],
    storage_location: &str,
    planeswalker: Option<&str>,
    descriptive_image: Option<&str>,
) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    check_length(&mut violations, "name", name, NAME_MAX_LEN);
    check_length(&mut violations, "description", description, DESCRIPTION_MAX_LEN);
    check_length(
        &mut violations,
        "storageLocation",
        storage_location,
        STORAGE_LOCATION_MAX_LEN,
    );

    if colors.is_empty() {
        violations.push(FieldViolation::new("colors", "colors must contain at least 1 color"));
    } else if colors.len() > MAX_COLORS {
        violations.push(FieldViolation::new(
            "colors",
            format!("colors must contain at most {} colors", MAX_COLORS),
        ));
    }

    if let Some(planeswalker) = planeswalker {
        if planeswalker.chars().count() > PLANESWALKER_MAX_LEN {
            violations.push(FieldViolation::new(
                "planeswalker",
                format!("planeswalker must be at most {} characters", PLANESWALKER_MAX_LEN),
            ));
        }
    }

    if let Some(image) = descriptive_image {
        if !is_image_url(image) {
            violations.push(FieldViolation::new(
                "descriptiveImage",
                "descriptiveImage must be an http(s) URL ending in .jpg, .jpeg, .png, .gif, .webp or .svg",
            ));
        }
    }

    violations
}

fn check_length(violations: &mut Vec<FieldViolation>, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len == 0 {
        violations.push(FieldViolation::new(field, format!("{} is required", field)));
    } else if len > max {
        violations.push(FieldViolation::new(
            field,
            format!("{} must be at most {} characters", field, max),
        ));
    }
}

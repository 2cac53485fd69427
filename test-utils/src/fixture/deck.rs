//! Deck fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating deck entity models without database insertion.
//! Values mirror what the server persists: canonical enum symbols, a JSON color array and
//! lower-cased `*_key` shadow columns.

use chrono::{DateTime, TimeZone, Utc};
use entity::deck;

/// Default deck id, a 32 character lowercase hex string.
pub const DEFAULT_ID: &str = "00000000000000000000000000000001";

/// Default deck name.
pub const DEFAULT_NAME: &str = "Test Deck";

/// Default deck description.
pub const DEFAULT_DESCRIPTION: &str = "A deck used in tests";

/// Default deck colors.
pub const DEFAULT_COLORS: &[&str] = &["R"];

/// Default tier rating.
pub const DEFAULT_TIER_RATING: &str = "B";

/// Default deck type.
pub const DEFAULT_DECK_TYPE: &str = "AGGRO";

/// Default game stage.
pub const DEFAULT_GAME_STAGE: &str = "EARLY";

/// Default storage location.
pub const DEFAULT_STORAGE_LOCATION: &str = "Shelf A";

/// Fixed creation timestamp used by fixtures, 2024-01-01T00:00:00Z.
pub fn default_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Serializes color symbols the way the deck table stores them.
pub fn colors_json(colors: &[&str]) -> String {
    serde_json::to_string(colors).unwrap()
}

/// Creates a deck entity model with default values.
///
/// # Default Values
/// - id: `"00000000000000000000000000000001"`
/// - name: `"Test Deck"`
/// - colors: `["R"]`
/// - tier_rating: `"B"`, deck_type: `"AGGRO"`, game_stage: `"EARLY"`
/// - has_card_sleeves: `true`, is_complete: `true`
/// - storage_location: `"Shelf A"`
/// - planeswalker / descriptive_image: `None`
/// - created_at / updated_at: 2024-01-01T00:00:00Z
pub fn entity() -> deck::Model {
    entity_builder().build()
}

/// Creates a deck entity builder for customization.
pub fn entity_builder() -> DeckEntityBuilder {
    DeckEntityBuilder::default()
}

/// Builder for creating customized deck entity models.
pub struct DeckEntityBuilder {
    model: deck::Model,
}

impl Default for DeckEntityBuilder {
    fn default() -> Self {
        let now = default_timestamp();
        Self {
            model: deck::Model {
                id: DEFAULT_ID.to_string(),
                name: DEFAULT_NAME.to_string(),
                name_key: DEFAULT_NAME.to_lowercase(),
                description: DEFAULT_DESCRIPTION.to_string(),
                description_key: DEFAULT_DESCRIPTION.to_lowercase(),
                colors: colors_json(DEFAULT_COLORS),
                tier_rating: DEFAULT_TIER_RATING.to_string(),
                deck_type: DEFAULT_DECK_TYPE.to_string(),
                game_stage: DEFAULT_GAME_STAGE.to_string(),
                has_card_sleeves: true,
                is_complete: true,
                storage_location: DEFAULT_STORAGE_LOCATION.to_string(),
                storage_location_key: DEFAULT_STORAGE_LOCATION.to_lowercase(),
                planeswalker: None,
                planeswalker_key: None,
                descriptive_image: None,
                created_at: now,
                updated_at: now,
            },
        }
    }
}

impl DeckEntityBuilder {
    /// Sets the deck id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.model.id = id.into();
        self
    }

    /// Sets the stored name and derives the case-folded `name_key` from it.
    ///
    /// The name is stored exactly as given; pass a title-cased name to mirror what the
    /// server would persist.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.model.name_key = name.to_lowercase();
        self.model.name = name;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.model.description_key = description.to_lowercase();
        self.model.description = description;
        self
    }

    /// Sets the color symbols, e.g. `&["W", "U"]`.
    pub fn colors(mut self, colors: &[&str]) -> Self {
        self.model.colors = colors_json(colors);
        self
    }

    pub fn tier_rating(mut self, tier_rating: impl Into<String>) -> Self {
        self.model.tier_rating = tier_rating.into();
        self
    }

    pub fn deck_type(mut self, deck_type: impl Into<String>) -> Self {
        self.model.deck_type = deck_type.into();
        self
    }

    pub fn game_stage(mut self, game_stage: impl Into<String>) -> Self {
        self.model.game_stage = game_stage.into();
        self
    }

    pub fn has_card_sleeves(mut self, has_card_sleeves: bool) -> Self {
        self.model.has_card_sleeves = has_card_sleeves;
        self
    }

    pub fn is_complete(mut self, is_complete: bool) -> Self {
        self.model.is_complete = is_complete;
        self
    }

    pub fn storage_location(mut self, storage_location: impl Into<String>) -> Self {
        let storage_location = storage_location.into();
        self.model.storage_location_key = storage_location.to_lowercase();
        self.model.storage_location = storage_location;
        self
    }

    pub fn planeswalker(mut self, planeswalker: Option<&str>) -> Self {
        self.model.planeswalker_key = planeswalker.map(str::to_lowercase);
        self.model.planeswalker = planeswalker.map(str::to_string);
        self
    }

    pub fn descriptive_image(mut self, descriptive_image: Option<&str>) -> Self {
        self.model.descriptive_image = descriptive_image.map(str::to_string);
        self
    }

    /// Sets both `created_at` and `updated_at`.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.model.created_at = created_at;
        self.model.updated_at = created_at;
        self
    }

    /// Builds the deck entity model.
    pub fn build(self) -> deck::Model {
        self.model
    }
}

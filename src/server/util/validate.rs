//! Request validation.
//!
//! Deck bodies are validated from the raw JSON value rather than a typed extractor so
//! that every problem in a request is reported at once, with the field name the client
//! used. Fields outside the deck vocabulary are ignored.

use serde_json::{Map, Value};
use std::str::FromStr;

use crate::{
    model::deck::{DeckListQuery, KeywordQuery},
    server::{
        error::validation::{FieldViolation, ValidationError},
        model::{
            deck::{
                is_image_url, CreateDeckParams, UpdateDeckParams, DESCRIPTION_MAX_LEN,
                MAX_COLORS, NAME_MAX_LEN, PLANESWALKER_MAX_LEN, STORAGE_LOCATION_MAX_LEN,
            },
            query::{DeckFilter, Pagination},
            symbol::{Color, ParseEnumError, SortField, SortOrder},
        },
        util::parse::{non_blank, parse_color_list, parse_flag, parse_lenient_number, parse_symbol},
    },
};

/// Body fields a deck request may carry.
pub const DECK_FIELDS: &[&str] = &[
    "name",
    "description",
    "colors",
    "tierRating",
    "deckType",
    "gameStage",
    "hasCardSleeves",
    "isComplete",
    "storageLocation",
    "planeswalker",
    "descriptiveImage",
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Mandatory fields must be present.
    Create,
    /// Every field is optional.
    Update,
}

/// Reads deck fields out of a JSON object, collecting violations as it goes.
///
/// Each reader returns `None` when the field is absent or invalid; in create mode an
/// absent mandatory field is itself a violation.
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    mode: Mode,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldReader<'a> {
    fn new(object: &'a Map<String, Value>, mode: Mode) -> Self {
        Self {
            object,
            mode,
            violations: Vec::new(),
        }
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, message));
    }

    /// Returns the raw value of a mandatory field, recording a violation if it is
    /// missing in create mode or null in either mode.
    fn required(&mut self, field: &str) -> Option<&'a Value> {
        let object = self.object;
        match object.get(field) {
            None if self.mode == Mode::Create => {
                self.reject(field, format!("{} is required", field));
                None
            }
            None => None,
            Some(Value::Null) => {
                self.reject(field, format!("{} is required", field));
                None
            }
            Some(value) => Some(value),
        }
    }

    fn string(&mut self, field: &str, max: usize) -> Option<String> {
        let value = self.required(field)?;
        let Some(text) = value.as_str() else {
            self.reject(field, format!("{} must be a string", field));
            return None;
        };

        let text = text.trim();
        let len = text.chars().count();
        if len == 0 {
            self.reject(field, format!("{} cannot be empty", field));
            None
        } else if len > max {
            self.reject(field, format!("{} must be at most {} characters", field, max));
            None
        } else {
            Some(text.to_string())
        }
    }

    fn boolean(&mut self, field: &str) -> Option<bool> {
        let value = self.required(field)?;
        match value.as_bool() {
            Some(flag) => Some(flag),
            None => {
                self.reject(field, format!("{} must be a boolean", field));
                None
            }
        }
    }

    fn symbol<T>(&mut self, field: &str) -> Option<T>
    where
        T: FromStr<Err = ParseEnumError>,
    {
        let value = self.required(field)?;
        let Some(text) = value.as_str() else {
            self.reject(field, format!("{} must be a string", field));
            return None;
        };

        match text.parse::<T>() {
            Ok(symbol) => Some(symbol),
            Err(e) => {
                self.reject(field, e.to_string());
                None
            }
        }
    }

    fn colors(&mut self) -> Option<Vec<Color>> {
        let value = self.required("colors")?;
        let Some(items) = value.as_array() else {
            self.reject("colors", "colors must be an array");
            return None;
        };

        if items.is_empty() {
            self.reject("colors", "colors must contain at least 1 color");
            return None;
        }
        if items.len() > MAX_COLORS {
            self.reject(
                "colors",
                format!("colors must contain at most {} colors", MAX_COLORS),
            );
            return None;
        }

        let mut colors = Vec::with_capacity(items.len());
        let mut valid = true;
        for (index, item) in items.iter().enumerate() {
            let field = format!("colors[{}]", index);
            match item.as_str().map(str::parse::<Color>) {
                Some(Ok(color)) => colors.push(color),
                Some(Err(e)) => {
                    self.reject(&field, e.to_string());
                    valid = false;
                }
                None => {
                    self.reject(&field, "color must be a string");
                    valid = false;
                }
            }
        }

        valid.then_some(colors)
    }

    /// Optional text field: absent is `None`, `null` or blank is `Some(None)`.
    fn optional_string(&mut self, field: &str, max: usize) -> Option<Option<String>> {
        let object = self.object;
        match object.get(field)? {
            Value::Null => Some(None),
            Value::String(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Some(None)
                } else if text.chars().count() > max {
                    self.reject(field, format!("{} must be at most {} characters", field, max));
                    None
                } else {
                    Some(Some(text.to_string()))
                }
            }
            _ => {
                self.reject(field, format!("{} must be a string", field));
                None
            }
        }
    }

    fn image(&mut self) -> Option<Option<String>> {
        let field = "descriptiveImage";
        match self.optional_string(field, usize::MAX)? {
            Some(url) if !is_image_url(&url) => {
                self.reject(
                    field,
                    "descriptiveImage must be an http(s) URL ending in .jpg, .jpeg, .png, .gif, .webp or .svg",
                );
                None
            }
            image => Some(image),
        }
    }

    fn finish(self) -> Result<(), ValidationError> {
        ValidationError::check(self.violations)
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object()
        .ok_or_else(|| ValidationError::single("body", "request body must be a JSON object"))
}

/// Validates a create request body.
///
/// # Returns
/// - `Ok(CreateDeckParams)` - Every mandatory field present and valid
/// - `Err(ValidationError)` - One violation per offending field
pub fn validate_create_request(body: &Value) -> Result<CreateDeckParams, ValidationError> {
    let object = as_object(body)?;
    let mut reader = FieldReader::new(object, Mode::Create);

    let name = reader.string("name", NAME_MAX_LEN);
    let description = reader.string("description", DESCRIPTION_MAX_LEN);
    let colors = reader.colors();
    let tier_rating = reader.symbol("tierRating");
    let deck_type = reader.symbol("deckType");
    let game_stage = reader.symbol("gameStage");
    let has_card_sleeves = reader.boolean("hasCardSleeves");
    let is_complete = reader.boolean("isComplete");
    let storage_location = reader.string("storageLocation", STORAGE_LOCATION_MAX_LEN);
    let planeswalker = reader.optional_string("planeswalker", PLANESWALKER_MAX_LEN);
    let descriptive_image = reader.image();

    let violations = reader.violations;
    let (
        Some(name),
        Some(description),
        Some(colors),
        Some(tier_rating),
        Some(deck_type),
        Some(game_stage),
        Some(has_card_sleeves),
        Some(is_complete),
        Some(storage_location),
    ) = (
        name,
        description,
        colors,
        tier_rating,
        deck_type,
        game_stage,
        has_card_sleeves,
        is_complete,
        storage_location,
    )
    else {
        return Err(ValidationError::new(violations));
    };
    ValidationError::check(violations)?;

    Ok(CreateDeckParams {
        name,
        description,
        colors,
        tier_rating,
        deck_type,
        game_stage,
        has_card_sleeves,
        is_complete,
        storage_location,
        planeswalker: planeswalker.flatten(),
        descriptive_image: descriptive_image.flatten(),
    })
}

/// Validates a partial update body. At least one deck field must be present.
pub fn validate_update_request(body: &Value) -> Result<UpdateDeckParams, ValidationError> {
    let object = as_object(body)?;

    if !DECK_FIELDS.iter().any(|field| object.contains_key(*field)) {
        return Err(ValidationError::single(
            "body",
            "at least one field must be provided",
        ));
    }

    let mut reader = FieldReader::new(object, Mode::Update);

    let patch = UpdateDeckParams {
        name: reader.string("name", NAME_MAX_LEN),
        description: reader.string("description", DESCRIPTION_MAX_LEN),
        colors: reader.colors(),
        tier_rating: reader.symbol("tierRating"),
        deck_type: reader.symbol("deckType"),
        game_stage: reader.symbol("gameStage"),
        has_card_sleeves: reader.boolean("hasCardSleeves"),
        is_complete: reader.boolean("isComplete"),
        storage_location: reader.string("storageLocation", STORAGE_LOCATION_MAX_LEN),
        planeswalker: reader.optional_string("planeswalker", PLANESWALKER_MAX_LEN),
        descriptive_image: reader.image(),
    };

    reader.finish()?;

    Ok(patch)
}

fn read_filter(query: &DeckListQuery, violations: &mut Vec<FieldViolation>) -> DeckFilter {
    fn collect<T>(result: Result<T, FieldViolation>, violations: &mut Vec<FieldViolation>) -> Option<T> {
        result.map_err(|v| violations.push(v)).ok()
    }

    let deck_type = non_blank(query.deck_type.as_deref())
        .and_then(|v| collect(parse_symbol("deckType", v), violations));
    let game_stage = non_blank(query.game_stage.as_deref())
        .and_then(|v| collect(parse_symbol("gameStage", v), violations));
    let tier_rating = non_blank(query.tier_rating.as_deref())
        .and_then(|v| collect(parse_symbol("tierRating", v), violations));
    let is_complete = non_blank(query.is_complete.as_deref())
        .and_then(|v| collect(parse_flag("isComplete", v), violations));
    let has_card_sleeves = non_blank(query.has_card_sleeves.as_deref())
        .and_then(|v| collect(parse_flag("hasCardSleeves", v), violations));
    let colors = non_blank(query.colors.as_deref()).and_then(|v| {
        parse_color_list("colors", v)
            .map_err(|errs| violations.extend(errs))
            .ok()
    });

    DeckFilter {
        deck_type,
        game_stage,
        tier_rating,
        is_complete,
        has_card_sleeves,
        storage_location: non_blank(query.storage_location.as_deref()).map(str::to_string),
        colors,
    }
}

/// Validates the filter parameters of a listing query, ignoring paging and sorting.
pub fn validate_filter_query(query: &DeckListQuery) -> Result<DeckFilter, ValidationError> {
    let mut violations = Vec::new();
    let filter = read_filter(query, &mut violations);

    ValidationError::check(violations)?;

    Ok(filter)
}

/// Validates a listing query.
///
/// Filters, `sortBy` and `sortOrder` are checked strictly. `page` and `limit` are never
/// rejected: unusable values fall back to their defaults.
pub fn validate_list_query(
    query: &DeckListQuery,
) -> Result<(DeckFilter, Pagination), ValidationError> {
    let mut violations = Vec::new();
    let filter = read_filter(query, &mut violations);

    let sort_by = match non_blank(query.sort_by.as_deref()) {
        Some(v) => parse_symbol::<SortField>("sortBy", v)
            .map_err(|e| violations.push(e))
            .unwrap_or(SortField::CreatedAt),
        None => SortField::CreatedAt,
    };
    let sort_order = match non_blank(query.sort_order.as_deref()) {
        Some(v) => parse_symbol::<SortOrder>("sortOrder", v)
            .map_err(|e| violations.push(e))
            .unwrap_or(SortOrder::Desc),
        None => SortOrder::Desc,
    };

    ValidationError::check(violations)?;

    let pagination = Pagination::new(
        parse_lenient_number(query.page.as_deref()),
        parse_lenient_number(query.limit.as_deref()),
    )
    .with_sort(sort_by, sort_order);

    Ok((filter, pagination))
}

/// Validates the keyword search query; the keyword must contain a non-blank term.
pub fn validate_keyword(query: &KeywordQuery) -> Result<String, ValidationError> {
    non_blank(query.keyword.as_deref())
        .map(str::to_string)
        .ok_or_else(|| ValidationError::single("keyword", "keyword is required"))
}

/// Validates the `colors` query of the color filter endpoint.
pub fn validate_colors_query(colors: Option<&str>) -> Result<Vec<Color>, ValidationError> {
    let Some(colors) = non_blank(colors) else {
        return Err(ValidationError::single("colors", "colors is required"));
    };

    parse_color_list("colors", colors).map_err(ValidationError::new)
}

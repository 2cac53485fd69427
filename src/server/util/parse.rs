use std::str::FromStr;

use crate::server::{
    error::validation::{FieldViolation, ValidationError},
    model::{
        deck::DeckId,
        symbol::{Color, ParseEnumError},
    },
};

/// Parses a deck id taken from the request path
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(DeckId)` - 32 hexadecimal characters, normalized to lower case
/// - `Err(ValidationError)` - Single violation on `id`
pub fn parse_deck_id(value: &str) -> Result<DeckId, ValidationError> {
    DeckId::parse(value.trim()).ok_or_else(|| {
        ValidationError::single("id", "id must be a 32 character hexadecimal string")
    })
}

/// Parses an enum symbol, reporting a failure against `field`
pub fn parse_symbol<T>(field: &str, value: &str) -> Result<T, FieldViolation>
where
    T: FromStr<Err = ParseEnumError>,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| FieldViolation::new(field, e.to_string()))
}

/// Parses a `true`/`false` query flag
pub fn parse_flag(field: &str, value: &str) -> Result<bool, FieldViolation> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FieldViolation::new(
            field,
            format!("{} must be true or false", field),
        )),
    }
}

/// Parses a page number or size; anything that is not an integer is treated as absent
/// so the caller falls back to its default.
pub fn parse_lenient_number(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse::<i64>().ok())
}

/// Parses a comma separated color list such as `W,U`
///
/// Blank entries are skipped. Every unknown symbol produces its own violation.
pub fn parse_color_list(field: &str, value: &str) -> Result<Vec<Color>, Vec<FieldViolation>> {
    let mut colors = Vec::new();
    let mut violations = Vec::new();

    for symbol in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match symbol.parse::<Color>() {
            Ok(color) => colors.push(color),
            Err(e) => violations.push(FieldViolation::new(field, e.to_string())),
        }
    }

    if colors.is_empty() && violations.is_empty() {
        violations.push(FieldViolation::new(
            field,
            format!("{} must contain at least one color", field),
        ));
    }

    if violations.is_empty() {
        Ok(colors)
    } else {
        Err(violations)
    }
}

/// Treats empty or whitespace-only query values as absent
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

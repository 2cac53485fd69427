use thiserror::Error;

use crate::model::api::ErrorDetailDto;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Name of the field as it appears in the request (`tierRating`, `colors[2]`, `body`).
    pub field: String,
    /// Human readable reason the value was rejected.
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn into_dto(self) -> ErrorDetailDto {
        ErrorDetailDto {
            field: self.field,
            message: self.message,
        }
    }
}

/// Input rejected before reaching the domain.
///
/// Carries every violation found rather than stopping at the first one so callers can
/// correct a request in a single round trip. Results in 400 Bad Request with the
/// violations listed under `details`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Builds an error holding exactly one violation.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldViolation::new(field, message)])
    }

    /// Returns `Ok(())` when no violations were collected.
    pub fn check(violations: Vec<FieldViolation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self::new(violations))
        }
    }

    /// Returns true if any violation refers to `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the API response envelope. The `AppError` enum is the
//! single tagged error type flowing out of the service and data layers; the HTTP
//! status and `error` code are chosen by matching on its variant.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorCode, ErrorDto},
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure errors use `#[from]` for
/// automatic conversion and always surface as 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed, missing or out-of-range input.
    ///
    /// Results in 400 Bad Request with one `details` entry per violation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Deck name already taken, detected by the service pre-check or by the
    /// unique index on the stored name key.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    /// Machine-readable code placed in the response envelope.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::ValidationError,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Conflict(_) => ErrorCode::Conflict,
            _ => ErrorCode::InternalError,
        }
    }

    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `Validation`, with per-field `details`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Conflict`
/// - 500 Internal Server Error - everything else, logged with full details while the
///   client only sees a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        match self {
            Self::Validation(err) => {
                tracing::debug!("Rejected request: {}", err);
                let details = err
                    .violations
                    .into_iter()
                    .map(|violation| violation.into_dto())
                    .collect();
                (
                    status,
                    Json(ErrorDto::new(code, "Validation failed").with_details(details)),
                )
                    .into_response()
            }
            Self::NotFound(msg) | Self::Conflict(msg) => {
                (status, Json(ErrorDto::new(code, msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(
                ErrorCode::InternalError,
                "Internal server error",
            )),
        )
            .into_response()
    }
}

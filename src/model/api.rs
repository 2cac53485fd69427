use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Machine-readable error codes carried in the `error` field of failed responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    NotFound,
    Conflict,
    InternalError,
}

/// One rejected field in a `VALIDATION_ERROR` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetailDto {
    pub field: String,
    pub message: String,
}

/// Body of every failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
    pub error: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorDetailDto>>,
}

impl ErrorDto {
    pub fn new(error: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error,
            details: None,
        }
    }

    pub fn with_details(mut self, details: Vec<ErrorDetailDto>) -> Self {
        self.details = Some(details);
        self
    }
}

/// Page metadata returned alongside list results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

/// Envelope wrapping every successful response.
///
/// `data` holds the payload, `pagination` is only present on paged listings and
/// `message` on mutations that report an outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            pagination: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationDto) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

impl ApiResponse<()> {
    /// Envelope carrying only a message, used after deletes and by the health check.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            pagination: None,
        }
    }
}

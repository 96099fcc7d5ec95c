use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A record field was assigned a value outside its allowed domain.
///
/// Raised both when a record is first constructed and when an existing record is
/// patched, so the same rules apply on every assignment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Camper names must be JSON strings.
    #[error("Name must be a non-empty string, got {0}")]
    NameNotString(String),

    /// Camper names may not be empty.
    #[error("Name must be a non-empty string")]
    EmptyName,

    /// Camper ages must be JSON integers.
    #[error("Age must be an integer between 8 and 18, inclusive, got {0}")]
    AgeNotInteger(String),

    /// Camper ages are limited to 8 through 18.
    #[error("Age must be an integer between 8 and 18, inclusive, got {0}")]
    AgeOutOfRange(i64),

    /// Signup times must be JSON integers.
    #[error("Time must be an integer between 0 and 23, inclusive, got {0}")]
    TimeNotInteger(String),

    /// Signup times are an hour of the day, 0 through 23.
    #[error("Time must be an integer between 0 and 23, inclusive, got {0}")]
    TimeOutOfRange(i64),
}

/// Converts validation errors into a 403 Forbidden response carrying the message.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::FORBIDDEN,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

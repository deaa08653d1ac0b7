use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected input, tagged with the path of the offending field.
///
/// Raised for malformed JSON, type mismatches, missing required fields, text that
/// fails normalisation and references to entities that do not exist. Never coerced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Dotted path of the field, e.g. `project_ids` or `project_ids[2]`.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected input: {}", self);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto {
                field: Some(self.field),
                ..ErrorDto::new(self.message)
            }),
        )
            .into_response()
    }
}

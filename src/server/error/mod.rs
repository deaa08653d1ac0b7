//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! None of these errors is retried inside the application; retry policy belongs to
//! the caller.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` and `ValidationError`
/// handle their own response mapping, while generic variants provide standard HTTP
/// status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401 Unauthorized and
    /// 403 Forbidden mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Malformed, missing or type-mismatched input field, or a reference to an
    /// entity that does not exist.
    ///
    /// Results in 422 Unprocessable Entity carrying the offending field path.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Passed through unmodified and results in 500 Internal Server Error with error
    /// details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// An entity was created but one of its associative relations could not be written.
    ///
    /// The entity exists in the store without the requested relation set. Results in
    /// 500 Internal Server Error; the response carries the new entity's `id` so the
    /// caller can retry the relation write or delete the orphan.
    #[error("{kind} {id} was created but writing its {relation} failed: {source}")]
    IncompleteWrite {
        kind: &'static str,
        id: i32,
        relation: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401 / 403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound` variant
/// - 422 Unprocessable Entity - For `Validation`, delegated to `ValidationError`
/// - 500 Internal Server Error - For `IncompleteWrite`, with the created entity's id
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::IncompleteWrite { id, .. } => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        id: Some(id),
                        ..ErrorDto::new("Entity was created but its relations could not be saved")
                    }),
                )
                    .into_response()
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
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The bearer credential is missing, malformed or carries the wrong secret.
    ///
    /// Results in a 401 Unauthorized response with a `WWW-Authenticate: Bearer`
    /// challenge.
    #[error("Missing or invalid bearer credential")]
    Unauthenticated,

    /// The authenticated principal lacks the capability an operation requires.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Principal {principal} lacks the '{capability}' capability")]
    Forbidden {
        /// Display form of the principal, a user id or `anonymous`.
        principal: String,
        /// Codename of the missing capability.
        capability: &'static str,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// Authentication and authorization failures map to distinct status codes so that
/// clients can tell a bad credential from a missing capability. Details are logged at
/// debug level while client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - For `Unauthenticated`
/// - 403 Forbidden - For `Forbidden`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(ErrorDto::new("Unauthorized")),
            )
                .into_response(),
            Self::Forbidden { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new(
                    "You do not have permission to perform this action",
                )),
            )
                .into_response(),
        }
    }
}

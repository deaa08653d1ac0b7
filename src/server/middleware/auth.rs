use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    config::AuthConfig,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::principal::Principal,
    state::AppState,
};

/// Separates the shared secret from the principal id in a credential.
pub const CREDENTIAL_DELIMITER: char = ':';

/// Result of checking a bearer credential.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// The secret matched. The principal is `Principal::Anonymous` when the id names no user.
    Authenticated(Principal),
    /// Malformed credential or wrong secret.
    Rejected,
}

/// Checks `<shared-secret>:<principal-id>` credentials.
pub struct BearerAuthenticator<'a> {
    db: &'a DatabaseConnection,
    shared_secret: &'a str,
}

impl<'a> BearerAuthenticator<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a AuthConfig) -> Self {
        Self {
            db,
            shared_secret: &config.shared_secret,
        }
    }

    /// Resolves a raw credential to a principal.
    ///
    /// The credential must split into exactly two components on `CREDENTIAL_DELIMITER`
    /// and the first must equal the shared secret, otherwise it is rejected. A second
    /// component that is not a user id, or names no user, yields the anonymous principal
    /// rather than a rejection.
    ///
    /// # Returns
    /// - `Ok(AuthOutcome::Authenticated)` - Secret matched
    /// - `Ok(AuthOutcome::Rejected)` - Malformed credential or wrong secret
    /// - `Err(DbErr)` - Looking up the principal failed
    pub async fn authenticate(&self, credential: &str) -> Result<AuthOutcome, DbErr> {
        let parts: Vec<&str> = credential.split(CREDENTIAL_DELIMITER).collect();

        let [secret, principal_id] = parts.as_slice() else {
            tracing::debug!("Rejected credential with {} components, expected 2", parts.len());
            return Ok(AuthOutcome::Rejected);
        };

        if *secret != self.shared_secret {
            tracing::debug!("Rejected credential with wrong shared secret");
            return Ok(AuthOutcome::Rejected);
        }

        let Ok(id) = principal_id.parse::<i32>() else {
            return Ok(AuthOutcome::Authenticated(Principal::Anonymous));
        };

        let principal = UserRepository::new(self.db)
            .find_principal(id)
            .await?
            .unwrap_or(Principal::Anonymous);

        Ok(AuthOutcome::Authenticated(principal))
    }
}

/// Authenticates the request's bearer credential and attaches the principal.
///
/// Handlers behind this middleware extract the principal with `Extension<Principal>`.
///
/// # Returns
/// - The inner response when the credential is accepted
/// - `401 Unauthorized` when the header is missing, is not a bearer credential, or the
///   credential is rejected
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(credential) = bearer_credential(req.headers()).map(ToString::to_string) else {
        tracing::debug!("Request without bearer credential");
        return Err(AuthError::Unauthenticated.into());
    };

    let authenticator = BearerAuthenticator::new(&state.db, &state.auth);

    match authenticator.authenticate(&credential).await? {
        AuthOutcome::Authenticated(principal) => {
            req.extensions_mut().insert(principal);
            Ok(next.run(req).await)
        }
        AuthOutcome::Rejected => Err(AuthError::Unauthenticated.into()),
    }
}

/// Extracts the credential from an `Authorization: Bearer <credential>` header.
///
/// The scheme is matched case-insensitively.
fn bearer_credential(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credential) = value.split_once(' ')?;

    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| credential.trim())
}

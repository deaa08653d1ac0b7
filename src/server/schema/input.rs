use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_path_to_error::Segment;

use crate::server::error::validation::ValidationError;

/// Column width of every text field.
pub const MAX_TEXT_LEN: usize = 100;

/// Field path reported when the body as a whole cannot be decoded.
const BODY_FIELD: &str = "body";

/// Strips surrounding whitespace and checks the result is non-blank and fits its column.
///
/// # Arguments
/// - `field` - Field path reported on failure
/// - `value` - Raw input text
///
/// # Returns
/// - `Ok(String)` - Trimmed text
/// - `Err(ValidationError)` - Text is blank or longer than `MAX_TEXT_LEN` characters
pub fn clean_text(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be blank"));
    }

    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::new(
            field,
            format!("must be at most {} characters", MAX_TEXT_LEN),
        ));
    }

    Ok(trimmed.to_string())
}

/// JSON body extractor that rejects with a `ValidationError`.
///
/// Unlike `axum::Json`, failures carry the path of the field that failed to decode
/// (`project_ids[1]`, `first_name`, ...) and map to 422 through `ValidationError`.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::new(BODY_FIELD, rejection.body_text()))?;

        decode_json(&bytes).map(ValidJson)
    }
}

/// Query string extractor that rejects with a `ValidationError` on field `query`.
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::try_from_uri(&parts.uri)
            .map(|Query(value)| ValidQuery(value))
            .map_err(|rejection| ValidationError::new("query", rejection.body_text()))
    }
}

/// Path parameter extractor that rejects with a `ValidationError` on field `id`.
///
/// Every resource route carries a single `{id}` segment.
#[derive(Debug, Clone)]
pub struct ValidPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| ValidPath(value))
            .map_err(|rejection| ValidationError::new("id", rejection.body_text()))
    }
}

/// Decodes a JSON document, reporting the path of the first field that fails.
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ValidationError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);

    let value = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        let path = known_path(e.path());
        let inner = e.into_inner();
        ValidationError::new(field_path(&path, &inner), message(&inner))
    })?;

    de.end().map_err(|e| ValidationError::new(BODY_FIELD, message(&e)))?;

    Ok(value)
}

/// Renders a path in `a.b[1]` form, dropping the `?` segments serde reports when it
/// fails before reaching a key.
fn known_path(path: &serde_path_to_error::Path) -> String {
    let mut rendered = String::new();

    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => rendered.push_str(&format!("[{}]", index)),
            Segment::Map { key } => push_key(&mut rendered, key),
            Segment::Enum { variant } => push_key(&mut rendered, variant),
            Segment::Unknown => {}
        }
    }

    rendered
}

fn push_key(path: &mut String, key: &str) {
    if !path.is_empty() {
        path.push('.');
    }
    path.push_str(key);
}

/// Resolves the reported field path.
///
/// A missing field is reported by serde against the enclosing object, so its name is
/// taken from the message and appended.
fn field_path(path: &str, error: &serde_json::Error) -> String {
    let parent = if path.is_empty() { None } else { Some(path) };

    match (parent, missing_field(error)) {
        (None, Some(missing)) => missing.to_string(),
        (Some(parent), Some(missing)) => format!("{}.{}", parent, missing),
        (Some(parent), None) => parent.to_string(),
        (None, None) => BODY_FIELD.to_string(),
    }
}

fn missing_field(error: &serde_json::Error) -> Option<String> {
    let text = error.to_string();
    let rest = text.strip_prefix("missing field `")?;
    let end = rest.find('`')?;

    Some(rest[..end].to_string())
}

/// serde_json's message without the trailing line/column location.
fn message(error: &serde_json::Error) -> String {
    let text = error.to_string();
    let location = format!(" at line {} column {}", error.line(), error.column());

    text.strip_suffix(&location).unwrap_or(&text).to_string()
}

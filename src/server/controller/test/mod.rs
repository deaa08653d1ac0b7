use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    config::{AuthConfig, PaginationConfig},
    router::router,
    state::AppState,
};


const SECRET: &str = "supersecret";

fn app(db: &DatabaseConnection) -> Router {
    router(AppState::new(
        db.clone(),
        AuthConfig {
            shared_secret: SECRET.to_string(),
        },
        PaginationConfig {
            default_limit: 10,
            max_limit: 20,
        },
    ))
}

/// Creates a superuser and returns the credential that authenticates as it.
async fn superuser_credential(db: &DatabaseConnection) -> Result<String, DbErr> {
    let user = factory::user::UserFactory::new(db)
        .superuser(true)
        .build()
        .await?;

    Ok(format!("{}:{}", SECRET, user.id))
}

/// Sends one request through the router and decodes the JSON response body.
///
/// An empty body decodes as `Value::Null`.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    credential: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    if let Some(credential) = credential {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", credential));
    }

    let body = match body {
        Some(body) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

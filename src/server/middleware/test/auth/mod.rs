use crate::server::{
    config::AuthConfig,
    middleware::auth::{AuthOutcome, BearerAuthenticator},
    model::principal::{Capability, Principal},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod authenticate;

fn config() -> AuthConfig {
    AuthConfig {
        shared_secret: "supersecret".to_string(),
    }
}

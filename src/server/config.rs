//! Environment-based application configuration.
//!
//! Configuration is read once at startup and handed to constructors explicitly; nothing
//! reads the environment after `Config::from_env` returns.

use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_PAGE_LIMIT: u64 = 100;
const DEFAULT_MAX_PAGE_LIMIT: u64 = 1000;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub auth: AuthConfig,
    pub pagination: PaginationConfig,

    /// Insert the demo department/project/employee graph on startup.
    pub seed_demo_data: bool,
}

/// Settings consumed by the bearer authenticator.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// First component every bearer credential must carry.
    pub shared_secret: String,
}

/// Limits applied to offset/limit pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size used when the request does not name one.
    pub default_limit: u64,
    /// Ceiling requested limits are clamped to.
    pub max_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: DEFAULT_MAX_PAGE_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let max_limit = optional_var("PAGINATION_MAX_LIMIT", DEFAULT_MAX_PAGE_LIMIT)?.max(1);

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            auth: AuthConfig {
                shared_secret: required_var("AUTH_SHARED_SECRET")?,
            },
            pagination: PaginationConfig {
                default_limit: optional_var("PAGINATION_DEFAULT_LIMIT", DEFAULT_PAGE_LIMIT)?
                    .clamp(1, max_limit),
                max_limit,
            },
            seed_demo_data: optional_var("SEED_DEMO_DATA", false)?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

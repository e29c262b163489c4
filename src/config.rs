//! Process configuration read from the environment (and `.env` via dotenvy in the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/customers";
pub const DEFAULT_PORT: u16 = 2009;
/// Shared secret accepted when `AUTH_SECRET` is not set.
pub const DEFAULT_AUTH_SECRET: &str = "November 10, 2009";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// How requests are authenticated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    /// `Authorization` must equal the secret verbatim.
    SharedSecret,
    /// `Authorization: Bearer <jwt>` signed (HS256) with the secret.
    Jwt,
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shared_secret" | "secret" => Ok(AuthMode::SharedSecret),
            "jwt" => Ok(AuthMode::Jwt),
            _ => Err("expected shared_secret or jwt".into()),
        }
    }
}

/// Where the `status` equality filter of the list route runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// `WHERE status = $1` in SQL.
    #[default]
    Query,
    /// Fetch every row, then filter in the handler.
    Scan,
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "query" => Ok(StatusFilter::Query),
            "scan" => Ok(StatusFilter::Scan),
            _ => Err("expected query or scan".into()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err("expected postgres or memory".into()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub db_max_connections: u32,
    pub auth_mode: AuthMode,
    pub auth_secret: String,
    pub status_filter: StatusFilter,
    pub storage: StorageBackend,
    pub max_body_bytes: usize,
}

impl Config {
    /// Read from process environment. Unset variables take their defaults; malformed ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Ok(Config {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            listen_addr: parse_or(
                "LISTEN_ADDR",
                get("LISTEN_ADDR"),
                SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            )?,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?,
            auth_mode: parse_or("AUTH_MODE", get("AUTH_MODE"), AuthMode::SharedSecret)?,
            auth_secret: get("AUTH_SECRET").unwrap_or_else(|| DEFAULT_AUTH_SECRET.into()),
            status_filter: parse_or("STATUS_FILTER", get("STATUS_FILTER"), StatusFilter::Query)?,
            storage: parse_or("STORAGE_BACKEND", get("STORAGE_BACKEND"), StorageBackend::Postgres)?,
            max_body_bytes: parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), DEFAULT_MAX_BODY_BYTES)?,
        })
    }
}

/// Parse `raw` when present, else use `default`.
fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = raw else {
        return Ok(default);
    };
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

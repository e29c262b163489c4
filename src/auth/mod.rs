//! Request authentication: a pluggable `Authenticator` and the middleware that enforces it.

mod jwt;
mod middleware;
mod shared_secret;

pub use jwt::{Claims, JwtAuthenticator};
pub use middleware::require_auth;
pub use shared_secret::SharedSecret;

use crate::config::{AuthMode, Config};
use axum::http::HeaderMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,
    #[error("malformed Authorization header")]
    MalformedHeader,
    #[error("wrong authorization")]
    WrongSecret,
    #[error("invalid token: {0}")]
    InvalidToken(String),
}

/// Identity attached to an authenticated request (stored in request extensions).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
}

/// Decides whether a request may proceed, based on its headers only.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, AuthError>;
}

/// Build the authenticator selected by `AUTH_MODE`.
pub fn from_config(config: &Config) -> Arc<dyn Authenticator> {
    match config.auth_mode {
        AuthMode::SharedSecret => Arc::new(SharedSecret::new(config.auth_secret.clone())),
        AuthMode::Jwt => Arc::new(JwtAuthenticator::new(config.auth_secret.as_bytes())),
    }
}

/// Raw `Authorization` header value as a string.
fn authorization_header(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)
}

use super::{authorization_header, AuthError, Authenticator, Principal};
use axum::http::HeaderMap;

pub const SHARED_SECRET_SUBJECT: &str = "shared-secret";

/// Accepts a request only when `Authorization` equals the configured string exactly.
pub struct SharedSecret {
    secret: String,
}

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        SharedSecret { secret: secret.into() }
    }
}

impl Authenticator for SharedSecret {
    fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, AuthError> {
        if authorization_header(headers)? != self.secret {
            return Err(AuthError::WrongSecret);
        }
        Ok(Principal {
            subject: SHARED_SECRET_SUBJECT.to_string(),
        })
    }
}

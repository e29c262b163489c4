use super::{authorization_header, AuthError, Authenticator, Principal};
use axum::http::HeaderMap;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// HS256 bearer tokens with a mandatory expiry.
pub struct JwtAuthenticator {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtAuthenticator {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        JwtAuthenticator {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Mint a token for `subject` valid for `ttl` from now.
    pub fn issue(&self, subject: &str, ttl: chrono::Duration) -> Result<String, AuthError> {
        let exp = (chrono::Utc::now() + ttl).timestamp().max(0) as usize;
        let claims = Claims {
            sub: subject.to_owned(),
            exp,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

impl Authenticator for JwtAuthenticator {
    fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, AuthError> {
        let token = authorization_header(headers)?
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MalformedHeader)?;
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        Ok(Principal {
            subject: data.claims.sub,
        })
    }
}

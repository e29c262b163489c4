//! JSON body extractor. The body is parsed whatever the Content-Type; parse failures are
//! `AppError::BadRequest` (400) with the parser message, an over-limit body is 413.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(rejection.body_text())
            } else {
                AppError::BadRequest(rejection.body_text())
            }
        })?;
        let value = serde_json::from_slice(&bytes).map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok(JsonBody(value))
    }
}

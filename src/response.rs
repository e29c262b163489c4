//! Success response helpers. Records and lists are returned unwrapped.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Confirmation returned by `DELETE /customers/:id`.
pub const CUSTOMER_DELETED: &str = "customer deleted";

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message(message: &'static str) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::OK, Json(MessageBody { message }))
}

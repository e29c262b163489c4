//! Customer CRUD handlers: create, read, list, update, delete.

use crate::config::StatusFilter;
use crate::error::AppError;
use crate::extractors::{JsonBody, QueryParams};
use crate::model::{Customer, CustomerPatch, NewCustomer};
use crate::response::{created, message, ok, CUSTOMER_DELETED};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
}

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

/// Keep only customers whose status equals `status` exactly.
pub fn filter_by_status(customers: Vec<Customer>, status: &str) -> Vec<Customer> {
    customers.into_iter().filter(|c| c.status == status).collect()
}

pub async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let status = params.status.filter(|s| !s.is_empty());
    let rows = match (status, state.status_filter) {
        (None, _) => state.store.list_all().await?,
        (Some(status), StatusFilter::Query) => state.store.list_by_status(&status).await?,
        (Some(status), StatusFilter::Scan) => filter_by_status(state.store.list_all().await?, &status),
    };
    debug!(count = rows.len(), "listed customers");
    Ok(ok(rows))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewCustomer>,
) -> Result<impl IntoResponse, AppError> {
    let customer = state.store.create(body).await?;
    debug!(id = customer.id, "created customer");
    Ok(created(customer))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let customer = state.store.get(id).await?;
    Ok(ok(customer))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(patch): JsonBody<CustomerPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let customer = state.store.update(id, patch).await?;
    debug!(id, "updated customer");
    Ok(ok(customer))
}

/// Responds with the same confirmation whether or not the row existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let existed = state.store.delete(id).await?;
    debug!(id, existed, "deleted customer");
    Ok(message(CUSTOMER_DELETED))
}

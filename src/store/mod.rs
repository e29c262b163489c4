//! Customer persistence. `CustomerStore` is the seam between handlers and storage.

mod memory;
mod postgres;

pub use memory::MemoryCustomerStore;
pub use postgres::{ensure_database_exists, PgCustomerStore, CUSTOMER_TABLE};

use crate::error::AppError;
use crate::model::{Customer, CustomerPatch, NewCustomer};
use async_trait::async_trait;

/// One method per SQL statement (update is a read-then-write in one transaction).
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Create the customer table if it does not exist. Idempotent.
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Insert a row and return it with its assigned id.
    async fn create(&self, new: NewCustomer) -> Result<Customer, AppError>;

    /// Fetch one row. `AppError::NotFound` when no row has this id.
    async fn get(&self, id: i32) -> Result<Customer, AppError>;

    /// Every row, unfiltered.
    async fn list_all(&self) -> Result<Vec<Customer>, AppError>;

    /// Rows whose status equals `status` exactly (case-sensitive).
    async fn list_by_status(&self, status: &str) -> Result<Vec<Customer>, AppError>;

    /// Overlay `patch` onto the stored row atomically. `AppError::NotFound` when absent.
    async fn update(&self, id: i32, patch: CustomerPatch) -> Result<Customer, AppError>;

    /// Remove the row if present. Returns whether a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Cheap connectivity check for readiness.
    async fn ping(&self) -> Result<(), AppError>;
}

pub(crate) fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("customer {}", id))
}

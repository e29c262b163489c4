//! In-process `CustomerStore`. Used by tests and by `STORAGE_BACKEND=memory`.

use super::{not_found, CustomerStore};
use crate::error::AppError;
use crate::model::{Customer, CustomerPatch, NewCustomer};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Rows {
    last_id: i32,
    by_id: BTreeMap<i32, Customer>,
}

/// Rows keyed by id; ids start at 1 and are never reused, like a SERIAL column.
#[derive(Default)]
pub struct MemoryCustomerStore {
    rows: RwLock<Rows>,
}

impl MemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn create(&self, new: NewCustomer) -> Result<Customer, AppError> {
        let mut rows = self.rows.write().await;
        rows.last_id += 1;
        let customer = new.into_customer(rows.last_id);
        rows.by_id.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn get(&self, id: i32) -> Result<Customer, AppError> {
        self.rows
            .read()
            .await
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.rows.read().await.by_id.values().cloned().collect())
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Customer>, AppError> {
        Ok(self
            .rows
            .read()
            .await
            .by_id
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, patch: CustomerPatch) -> Result<Customer, AppError> {
        let mut rows = self.rows.write().await;
        let customer = rows.by_id.get_mut(&id).ok_or_else(|| not_found(id))?;
        patch.apply(customer);
        Ok(customer.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.rows.write().await.by_id.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

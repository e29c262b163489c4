//! PostgreSQL-backed `CustomerStore` and database bootstrap.

use super::{not_found, CustomerStore};
use crate::error::{AppError, ConfigError};
use crate::model::{Customer, CustomerPatch, NewCustomer};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const CUSTOMER_TABLE: &str = "cust";

// Columns are nullable TEXT; NULL reads back as an empty string.
const SELECT_COLUMNS: &str =
    "id, COALESCE(name, '') AS name, COALESCE(email, '') AS email, COALESCE(status, '') AS status";

#[derive(Clone)]
pub struct PgCustomerStore {
    pool: PgPool,
}

impl PgCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        PgCustomerStore { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id SERIAL PRIMARY KEY,
                name TEXT,
                email TEXT,
                status TEXT
            )
            "#,
            CUSTOMER_TABLE
        );
        sqlx::query(&ddl).execute(&self.pool).await?;
        Ok(())
    }

    async fn create(&self, new: NewCustomer) -> Result<Customer, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, email, status) VALUES ($1, $2, $3) RETURNING {}",
            CUSTOMER_TABLE, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(&new.name)
            .bind(&new.email)
            .bind(&new.status)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get(&self, id: i32) -> Result<Customer, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", SELECT_COLUMNS, CUSTOMER_TABLE);
        sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", SELECT_COLUMNS, CUSTOMER_TABLE);
        let rows = sqlx::query_as::<_, Customer>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Customer>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE status = $1 ORDER BY id",
            SELECT_COLUMNS, CUSTOMER_TABLE
        );
        let rows = sqlx::query_as::<_, Customer>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i32, patch: CustomerPatch) -> Result<Customer, AppError> {
        let mut tx = self.pool.begin().await?;
        let select = format!(
            "SELECT {} FROM {} WHERE id = $1 FOR UPDATE",
            SELECT_COLUMNS, CUSTOMER_TABLE
        );
        let mut customer = sqlx::query_as::<_, Customer>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found(id))?;
        patch.apply(&mut customer);

        sqlx::query(&format!(
            "UPDATE {} SET name = $2, email = $3, status = $4 WHERE id = $1",
            CUSTOMER_TABLE
        ))
        .bind(id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.status)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(customer)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", CUSTOMER_TABLE))
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
/// A URL without a database path uses the server's default database and is left alone.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin_url, db_name)) = parse_db_name_from_url(database_url) else {
        return Ok(());
    };
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: "(redacted)".into(),
        reason: e.to_string(),
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection URL into (url of the `postgres` admin database, target database name).
/// `None` when the URL has no database path.
fn parse_db_name_from_url(url: &str) -> Option<(String, String)> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..].find('/').map(|i| scheme_end + i + 1)?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim();
    let query = parts.next().map(|q| format!("?{}", q)).unwrap_or_default();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres{}", base, query);
    Some((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

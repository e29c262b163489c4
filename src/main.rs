//! customer-api server: loads config from the environment, ensures the customer table, serves.

use customer_api::{
    app, auth, ensure_database_exists, AppState, Config, CustomerStore, MemoryCustomerStore, PgCustomerStore,
    StorageBackend,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("customer_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn CustomerStore> = match config.storage {
        StorageBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(&config.database_url)
                .await?;
            Arc::new(PgCustomerStore::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on exit");
            Arc::new(MemoryCustomerStore::new())
        }
    };

    // No request can be served without the table.
    store.ensure_schema().await?;

    let state = AppState::new(store, auth::from_config(&config), config.status_filter);
    let router = app(state, config.max_body_bytes);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        auth = ?config.auth_mode,
        status_filter = ?config.status_filter,
        "listening on {}",
        listener.local_addr()?
    );
    axum::serve(listener, router).await?;
    Ok(())
}

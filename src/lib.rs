//! Customer API: authenticated REST CRUD over a single PostgreSQL table.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use auth::{Authenticator, JwtAuthenticator, Principal, SharedSecret};
pub use config::{AuthMode, Config, StatusFilter, StorageBackend};
pub use error::{AppError, ConfigError};
pub use model::{Customer, CustomerPatch, NewCustomer};
pub use routes::app;
pub use state::AppState;
pub use store::{ensure_database_exists, CustomerStore, MemoryCustomerStore, PgCustomerStore};

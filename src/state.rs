//! Shared application state for all routes.

use crate::auth::Authenticator;
use crate::config::StatusFilter;
use crate::store::CustomerStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CustomerStore>,
    pub auth: Arc<dyn Authenticator>,
    /// Where `GET /customers?status=` filters: in SQL or after a full fetch.
    pub status_filter: StatusFilter,
}

impl AppState {
    pub fn new(store: Arc<dyn CustomerStore>, auth: Arc<dyn Authenticator>, status_filter: StatusFilter) -> Self {
        AppState {
            store,
            auth,
            status_filter,
        }
    }
}

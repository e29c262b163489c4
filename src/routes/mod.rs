//! Router assembly. Every route, matched or not, passes the auth middleware first.

mod common;
mod customer;

pub use common::common_routes;
pub use customer::customer_routes;

use crate::auth::require_auth;
use crate::state::AppState;
use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: customer and common routes behind auth, body limit and request tracing.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(customer_routes())
        .merge(common_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(state.clone(), require_auth))
                // Innermost: it changes the body type to `Limited<Body>`.
                .layer(RequestBodyLimitLayer::new(max_body_bytes)),
        )
        .with_state(state)
}

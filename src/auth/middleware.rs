use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

/// Rejects the request with 401 unless the configured authenticator accepts its headers.
/// On success the `Principal` is stored in request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    match state.auth.authenticate(req.headers()) {
        Ok(principal) => {
            debug!(subject = %principal.subject, path = %req.uri().path(), "authenticated");
            req.extensions_mut().insert(principal);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(method = %req.method(), path = %req.uri().path(), error = %e, "rejected request");
            Err(AppError::Unauthorized(e))
        }
    }
}

//! Route definitions for authentication.
//!
//! Mounted at `/auth` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes.
///
/// ```text
/// POST /login    -> login
/// POST /refresh  -> refresh
/// POST /logout   -> logout
/// GET  /me       -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

//! Route definitions for citizen intake. No authentication.
//!
//! Mounted at `/public` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Public intake routes.
///
/// ```text
/// POST /complaints            -> submit_complaint
/// POST /feedback              -> submit_feedback
/// POST /anonymous-complaints  -> submit_anonymous_complaint
/// GET  /departments           -> list_departments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/complaints", post(public::submit_complaint))
        .route("/feedback", post(public::submit_feedback))
        .route(
            "/anonymous-complaints",
            post(public::submit_anonymous_complaint),
        )
        .route("/departments", get(public::list_departments))
}

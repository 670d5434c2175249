//! Route definitions for feedback triage (read-only).
//!
//! Mounted at `/feedback` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Feedback triage routes.
///
/// ```text
/// GET /       -> list_feedback
/// GET /{id}   -> get_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(feedback::list_feedback))
        .route("/{id}", get(feedback::get_feedback))
}

//! Route definitions for complaint triage.
//!
//! Mounted at `/complaints` by `api_routes()`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::complaints;
use crate::state::AppState;

/// Complaint triage routes.
///
/// ```text
/// GET  /                  -> list_complaints
/// GET  /{id}              -> get_complaint
/// PUT  /{id}/status       -> update_complaint_status
/// PUT  /{id}/department   -> reassign_complaint_department
/// GET  /{id}/comments     -> list_comments
/// POST /{id}/comments     -> add_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(complaints::list_complaints))
        .route("/{id}", get(complaints::get_complaint))
        .route("/{id}/status", put(complaints::update_complaint_status))
        .route(
            "/{id}/department",
            put(complaints::reassign_complaint_department),
        )
        .route(
            "/{id}/comments",
            get(complaints::list_comments).post(complaints::add_comment),
        )
}

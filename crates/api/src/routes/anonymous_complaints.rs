//! Route definitions for anonymous complaint triage.
//!
//! Mounted at `/anonymous-complaints` by `api_routes()`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::anonymous_complaints;
use crate::state::AppState;

/// Anonymous complaint triage routes.
///
/// ```text
/// GET /                  -> list_anonymous_complaints
/// GET /{id}              -> get_anonymous_complaint
/// PUT /{id}/status       -> update_anonymous_complaint_status
/// PUT /{id}/department   -> assign_anonymous_complaint_department
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(anonymous_complaints::list_anonymous_complaints))
        .route("/{id}", get(anonymous_complaints::get_anonymous_complaint))
        .route(
            "/{id}/status",
            put(anonymous_complaints::update_anonymous_complaint_status),
        )
        .route(
            "/{id}/department",
            put(anonymous_complaints::assign_anonymous_complaint_department),
        )
}

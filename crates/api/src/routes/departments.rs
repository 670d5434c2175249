//! Route definitions for department administration (admin only).
//!
//! Mounted at `/admin/departments` by `api_routes()`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::departments;
use crate::state::AppState;

/// Department admin routes.
///
/// ```text
/// GET    /        -> list_departments
/// POST   /        -> create_department
/// PUT    /{id}    -> update_department
/// DELETE /{id}    -> delete_department (refused while referenced)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(departments::list_departments).post(departments::create_department),
        )
        .route(
            "/{id}",
            put(departments::update_department).delete(departments::delete_department),
        )
}

//! Route definitions for staff account administration (admin only).
//!
//! Mounted at `/admin/users` by `api_routes()`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User admin routes.
///
/// ```text
/// GET  /        -> list_users
/// POST /        -> create_user
/// GET  /{id}    -> get_user
/// PUT  /{id}    -> update_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/{id}", get(users::get_user).put(users::update_user))
}

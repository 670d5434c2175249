pub mod anonymous_complaints;
pub mod auth;
pub mod complaints;
pub mod dashboard;
pub mod departments;
pub mod feedback;
pub mod health;
pub mod public;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (public, idempotent)
/// /auth/me                             current account (requires auth)
///
/// /public/complaints                   citizen complaint intake (POST)
/// /public/feedback                     citizen feedback intake (POST)
/// /public/anonymous-complaints         anonymous report intake (POST)
/// /public/departments                  department list for forms (GET)
///
/// /complaints                          list (auth, visibility-scoped)
/// /complaints/{id}                     detail
/// /complaints/{id}/status              transition (PUT)
/// /complaints/{id}/department          reassign (PUT)
/// /complaints/{id}/comments            list, append
///
/// /feedback                            list (auth, visibility-scoped)
/// /feedback/{id}                       detail
///
/// /anonymous-complaints                list (auth, visibility-scoped)
/// /anonymous-complaints/{id}           detail
/// /anonymous-complaints/{id}/status    transition (PUT)
/// /anonymous-complaints/{id}/department assign (PUT)
///
/// /admin/departments                   list, create (admin only)
/// /admin/departments/{id}              update, delete
///
/// /admin/users                         list, create (admin only)
/// /admin/users/{id}                    get, update
///
/// /dashboard/summary                   aggregate figures (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/public", public::router())
        .nest("/complaints", complaints::router())
        .nest("/feedback", feedback::router())
        .nest("/anonymous-complaints", anonymous_complaints::router())
        .nest("/admin/departments", departments::router())
        .nest("/admin/users", users::router())
        .nest("/dashboard", dashboard::router())
}

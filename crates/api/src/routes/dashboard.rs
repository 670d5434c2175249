//! Route definitions for the triage dashboard.
//!
//! Mounted at `/dashboard` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes.
///
/// ```text
/// GET /summary -> summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/summary", get(dashboard::summary))
}

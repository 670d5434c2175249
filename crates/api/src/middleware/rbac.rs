//! Role-based access control (RBAC) extractors.
//!
//! Triage visibility is data-scoped by the core visibility filter, so most
//! routes only need [`AuthActor`]. The extractor here covers the routes
//! that are role-gated outright: department and user administration.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use civik_core::error::CoreError;
use civik_core::roles::ROLE_ADMINISTRATOR;
use civik_core::visibility::Actor;

use super::auth::AuthActor;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `administrator` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(actor): RequireAdmin) -> AppResult<Json<()>> {
///     // actor is guaranteed to be an administrator here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub Actor);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthActor(actor) = AuthActor::from_request_parts(parts, state).await?;
        if actor.role != ROLE_ADMINISTRATOR {
            return Err(AppError::Core(CoreError::Forbidden(
                "Administrator role required".into(),
            )));
        }
        Ok(RequireAdmin(actor))
    }
}

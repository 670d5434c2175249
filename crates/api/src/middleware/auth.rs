//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use civik_core::error::CoreError;
use civik_core::visibility::Actor;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated actor extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// This is the identity context: resolved fresh on every request, never
/// cached across requests. Use it as an extractor parameter in any handler
/// that requires authentication:
///
/// ```ignore
/// async fn my_handler(AuthActor(actor): AuthActor) -> AppResult<Json<()>> {
///     tracing::info!(user_id = actor.user_id, role = %actor.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthActor(pub Actor);

impl FromRequestParts<AppState> for AuthActor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthActor(claims.actor()))
    }
}

//! Handlers for the `/auth` resource (login, refresh, logout, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use civik_core::error::CoreError;
use civik_db::models::user::UserResponse;
use civik_db::repositories::{SessionRepo, UserRepo};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthActor;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh` and `POST /auth/logout`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_ok = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification failed: {e}")))?;
    if !password_ok {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let response = issue_tokens(&state, user).await?;
    tracing::info!(user_id = response.user.id, "User logged in");
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a live refresh token for a fresh access + refresh token pair.
/// The presented token's session is revoked (rotation).
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let hash = hash_refresh_token(&input.refresh_token);
    let session = SessionRepo::find_by_token_hash(&state.pool, &hash)
        .await?
        .filter(|s| s.is_valid_at(Utc::now()))
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Account is not available".into()))
        })?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let response = issue_tokens(&state, user).await?;
    tracing::debug!(user_id = response.user.id, "Refresh token rotated");
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke the presented refresh token's session. Idempotent: an unknown or
/// already-revoked token still yields 204.
pub async fn logout(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<impl IntoResponse> {
    let hash = hash_refresh_token(&input.refresh_token);
    if let Some(session) = SessionRepo::find_by_token_hash(&state.pool, &hash).await? {
        SessionRepo::revoke(&state.pool, session.id).await?;
        tracing::info!(user_id = session.user_id, "User logged out");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
///
/// The authenticated user's own account record.
pub async fn me(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, actor.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: actor.user_id,
        }))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// Mint an access + refresh token pair for `user` and record the session.
async fn issue_tokens(
    state: &AppState,
    user: civik_db::models::user::User,
) -> Result<AuthResponse, AppError> {
    let jwt = &state.config.jwt;

    let access_token = generate_access_token(user.id, &user.role, user.department_id, jwt)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))?;

    let (refresh_token, refresh_hash) = generate_refresh_token();
    let expires_at = Utc::now() + Duration::days(jwt.refresh_token_expiry_days);
    SessionRepo::create(&state.pool, user.id, &refresh_hash, expires_at).await?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        expires_in: jwt.access_token_expiry_mins * 60,
        user: UserResponse::from(user),
    })
}

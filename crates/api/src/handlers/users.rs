//! Handlers for staff account administration. Administrator only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use civik_core::error::CoreError;
use civik_core::roles::is_valid_role;
use civik_core::types::DbId;
use civik_db::models::user::{CreateUser, CreateUserRequest, UpdateUser, UserResponse};
use civik_db::repositories::{SessionRepo, UserRepo};

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/users
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list_all(&state.pool).await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(DataResponse { data: users }))
}

/// GET /admin/users/:id
pub async fn get_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// POST /admin/users
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_role(&input.role)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
            role: input.role,
            department_id: input.department_id,
        },
    )
    .await?;

    tracing::info!(
        user_id = user.id,
        role = %user.role,
        created_by = admin.user_id,
        "User created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}

/// PUT /admin/users/:id
///
/// Deactivating an account also revokes its refresh sessions, so the
/// lockout takes effect as soon as the access token expires.
pub async fn update_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref role) = input.role {
        validate_role(role)?;
    }

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    if input.is_active == Some(false) {
        let revoked = SessionRepo::revoke_all_for_user(&state.pool, id).await?;
        tracing::info!(user_id = id, revoked, "Sessions revoked on deactivation");
    }

    tracing::info!(user_id = id, updated_by = admin.user_id, "User updated");

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// Reject role names not in the fixed set.
fn validate_role(role: &str) -> Result<(), AppError> {
    if is_valid_role(role) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "role: unknown role '{role}'"
        ))))
    }
}

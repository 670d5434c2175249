//! Handlers for department administration. All endpoints require the
//! `administrator` role; the public read-only list lives in
//! [`crate::handlers::public`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use civik_core::error::CoreError;
use civik_core::types::DbId;
use civik_db::models::department::{CreateDepartment, UpdateDepartment};
use civik_db::repositories::DepartmentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/departments
pub async fn list_departments(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let departments = DepartmentRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: departments }))
}

/// POST /admin/departments
pub async fn create_department(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateDepartment>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let department = DepartmentRepo::create(&state.pool, &input).await?;

    tracing::info!(
        department_id = department.id,
        code = %department.code,
        user_id = admin.user_id,
        "Department created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: department })))
}

/// PUT /admin/departments/:id
pub async fn update_department(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDepartment>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let department = DepartmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }))?;

    tracing::info!(department_id = id, user_id = admin.user_id, "Department updated");

    Ok(Json(DataResponse { data: department }))
}

/// DELETE /admin/departments/:id
///
/// Refused with 409 while any submission still references the department.
pub async fn delete_department(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let references = DepartmentRepo::count_references(&state.pool, id).await?;
    if references > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Department {id} is referenced by {references} submission(s) and cannot be deleted"
        ))));
    }

    let deleted = DepartmentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }));
    }

    tracing::info!(department_id = id, user_id = admin.user_id, "Department deleted");

    Ok(StatusCode::NO_CONTENT)
}

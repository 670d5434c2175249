//! Handlers for anonymous complaint triage.
//!
//! Anonymous complaints arrive with no department; administrators assign
//! one during triage, after which the record appears in that department
//! head's lists.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use civik_core::error::CoreError;
use civik_core::submission::validate_transition;
use civik_core::triage::{list_page, Page};
use civik_core::types::DbId;
use civik_core::visibility::visible_or_not_found;
use civik_db::models::anonymous_complaint::{AnonymousComplaint, AnonymousComplaintResponse};
use civik_db::models::complaint::{ReassignDepartment, UpdateSubmissionStatus};
use civik_db::repositories::{AnonymousComplaintRepo, DepartmentRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::department_name_map;
use crate::middleware::auth::AuthActor;
use crate::query::TriageListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /anonymous-complaints
///
/// List anonymous complaints visible to the actor.
pub async fn list_anonymous_complaints(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
    Query(params): Query<TriageListParams>,
) -> AppResult<impl IntoResponse> {
    let complaints = AnonymousComplaintRepo::list_all(&state.pool).await?;
    let departments = DepartmentRepo::list_all(&state.pool).await?;
    let names = department_name_map(&departments);

    let page = list_page(
        &actor,
        complaints,
        params.search.as_deref(),
        params.status.as_deref(),
        params.page,
        params.page_size,
        |id| names.get(&id).cloned(),
    );

    let page = Page {
        items: page
            .items
            .into_iter()
            .map(AnonymousComplaintResponse::from)
            .collect::<Vec<_>>(),
        total_count: page.total_count,
        page: page.page,
        page_size: page.page_size,
    };

    Ok(Json(DataResponse { data: page }))
}

/// GET /anonymous-complaints/:id
pub async fn get_anonymous_complaint(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let complaint = fetch_visible(&state, &actor, id).await?;
    Ok(Json(DataResponse {
        data: AnonymousComplaintResponse::from(complaint),
    }))
}

/// PUT /anonymous-complaints/:id/status
pub async fn update_anonymous_complaint_status(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSubmissionStatus>,
) -> AppResult<impl IntoResponse> {
    let current = fetch_visible(&state, &actor, id).await?;
    validate_transition(&current.status, &input.status)?;

    let updated = AnonymousComplaintRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AnonymousComplaint",
            id,
        }))?;

    tracing::info!(
        anonymous_complaint_id = id,
        from = %current.status,
        to = %input.status,
        user_id = actor.user_id,
        "Anonymous complaint status updated",
    );

    Ok(Json(DataResponse {
        data: AnonymousComplaintResponse::from(updated),
    }))
}

/// PUT /anonymous-complaints/:id/department
///
/// Assign (or reassign) the department. Unassigned records are visible to
/// administrators only, so first assignment is an admin action in effect.
pub async fn assign_anonymous_complaint_department(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReassignDepartment>,
) -> AppResult<impl IntoResponse> {
    fetch_visible(&state, &actor, id).await?;

    DepartmentRepo::find_by_id(&state.pool, input.department_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "department_id: unknown department {}",
                input.department_id
            )))
        })?;

    let updated = AnonymousComplaintRepo::update_department(&state.pool, id, input.department_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AnonymousComplaint",
            id,
        }))?;

    tracing::info!(
        anonymous_complaint_id = id,
        department_id = input.department_id,
        user_id = actor.user_id,
        "Anonymous complaint assigned to department",
    );

    Ok(Json(DataResponse {
        data: AnonymousComplaintResponse::from(updated),
    }))
}

/// Fetch an anonymous complaint and collapse "missing" and "out of scope"
/// into the same `NotFound`.
async fn fetch_visible(
    state: &AppState,
    actor: &civik_core::visibility::Actor,
    id: DbId,
) -> Result<AnonymousComplaint, AppError> {
    let complaint = AnonymousComplaintRepo::find_by_id(&state.pool, id).await?;
    Ok(visible_or_not_found(actor, complaint, "AnonymousComplaint", id)?)
}

//! Handlers for complaint triage: list, detail, status transitions,
//! department reassignment, and comments.
//!
//! Every endpoint resolves the actor fresh from the token and gates on the
//! core visibility filter. A record outside the actor's scope is
//! indistinguishable from one that does not exist.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use civik_core::error::CoreError;
use civik_core::submission::validate_transition;
use civik_core::triage::{list_page, validate_comment_content, Page};
use civik_core::types::DbId;
use civik_core::visibility::visible_or_not_found;
use civik_db::models::comment::CreateComment;
use civik_db::models::complaint::{
    Complaint, ComplaintResponse, ReassignDepartment, UpdateSubmissionStatus,
};
use civik_db::repositories::{CommentRepo, ComplaintRepo, DepartmentRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::department_name_map;
use crate::middleware::auth::AuthActor;
use crate::query::TriageListParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /complaints
// ---------------------------------------------------------------------------

/// List complaints visible to the actor, searchable and paginated.
pub async fn list_complaints(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
    Query(params): Query<TriageListParams>,
) -> AppResult<impl IntoResponse> {
    let complaints = ComplaintRepo::list_all(&state.pool).await?;
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
            .map(ComplaintResponse::from)
            .collect::<Vec<_>>(),
        total_count: page.total_count,
        page: page.page,
        page_size: page.page_size,
    };

    Ok(Json(DataResponse { data: page }))
}

// ---------------------------------------------------------------------------
// GET /complaints/:id
// ---------------------------------------------------------------------------

/// Get a single complaint by ID, if visible to the actor.
pub async fn get_complaint(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let complaint = fetch_visible(&state, &actor, id).await?;
    Ok(Json(DataResponse {
        data: ComplaintResponse::from(complaint),
    }))
}

// ---------------------------------------------------------------------------
// PUT /complaints/:id/status
// ---------------------------------------------------------------------------

/// Transition a complaint's status. Any actor who can see the record may
/// transition it, to any known status.
pub async fn update_complaint_status(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSubmissionStatus>,
) -> AppResult<impl IntoResponse> {
    let current = fetch_visible(&state, &actor, id).await?;
    validate_transition(&current.status, &input.status)?;

    let updated = ComplaintRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;

    tracing::info!(
        complaint_id = id,
        from = %current.status,
        to = %input.status,
        user_id = actor.user_id,
        "Complaint status updated",
    );

    Ok(Json(DataResponse {
        data: ComplaintResponse::from(updated),
    }))
}

// ---------------------------------------------------------------------------
// PUT /complaints/:id/department
// ---------------------------------------------------------------------------

/// Reassign a complaint to another department.
///
/// A department head handing a record to another department loses sight of
/// it afterwards; that is the intended outcome of reassignment.
pub async fn reassign_complaint_department(
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

    let updated = ComplaintRepo::update_department(&state.pool, id, input.department_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;

    tracing::info!(
        complaint_id = id,
        department_id = input.department_id,
        user_id = actor.user_id,
        "Complaint reassigned",
    );

    Ok(Json(DataResponse {
        data: ComplaintResponse::from(updated),
    }))
}

// ---------------------------------------------------------------------------
// POST /complaints/:id/comments
// ---------------------------------------------------------------------------

/// Append a triage comment to a complaint.
pub async fn add_comment(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    fetch_visible(&state, &actor, id).await?;
    let content = validate_comment_content(&input.content)?;

    let comment = CommentRepo::create(&state.pool, id, actor.user_id, content).await?;

    tracing::info!(
        complaint_id = id,
        comment_id = comment.id,
        user_id = actor.user_id,
        "Comment added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

// ---------------------------------------------------------------------------
// GET /complaints/:id/comments
// ---------------------------------------------------------------------------

/// List a complaint's comments, oldest first.
pub async fn list_comments(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    fetch_visible(&state, &actor, id).await?;
    let comments = CommentRepo::list_for_complaint(&state.pool, id).await?;
    Ok(Json(DataResponse { data: comments }))
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// Fetch a complaint and collapse "missing" and "out of scope" into the
/// same `NotFound`.
async fn fetch_visible(
    state: &AppState,
    actor: &civik_core::visibility::Actor,
    id: DbId,
) -> Result<Complaint, AppError> {
    let complaint = ComplaintRepo::find_by_id(&state.pool, id).await?;
    Ok(visible_or_not_found(actor, complaint, "Complaint", id)?)
}

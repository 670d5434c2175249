//! Handlers for feedback triage. Read-only: feedback has no status
//! lifecycle and no mutation endpoints.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use civik_core::triage::list_page;
use civik_core::types::DbId;
use civik_core::visibility::visible_or_not_found;
use civik_db::repositories::{DepartmentRepo, FeedbackRepo};

use crate::error::AppResult;
use crate::handlers::department_name_map;
use crate::middleware::auth::AuthActor;
use crate::query::TriageListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /feedback
///
/// List feedback visible to the actor. The `status` query parameter is
/// ignored: feedback has no status.
pub async fn list_feedback(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
    Query(params): Query<TriageListParams>,
) -> AppResult<impl IntoResponse> {
    let feedback = FeedbackRepo::list_all(&state.pool).await?;
    let departments = DepartmentRepo::list_all(&state.pool).await?;
    let names = department_name_map(&departments);

    let page = list_page(
        &actor,
        feedback,
        params.search.as_deref(),
        None,
        params.page,
        params.page_size,
        |id| names.get(&id).cloned(),
    );

    Ok(Json(DataResponse { data: page }))
}

/// GET /feedback/:id
///
/// Get a single feedback entry, if visible to the actor.
pub async fn get_feedback(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let feedback = FeedbackRepo::find_by_id(&state.pool, id).await?;
    let feedback = visible_or_not_found(&actor, feedback, "Feedback", id)?;
    Ok(Json(DataResponse { data: feedback }))
}

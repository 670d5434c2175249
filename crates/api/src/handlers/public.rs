//! Handlers for citizen-facing intake: no authentication, strict
//! validation, nothing persisted on failure.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use civik_core::error::CoreError;
use civik_core::submission::{
    generate_reference_code, REF_PREFIX_ANONYMOUS, REF_PREFIX_COMPLAINT,
};
use civik_core::types::DbId;
use civik_db::models::anonymous_complaint::NewAnonymousComplaint;
use civik_db::models::complaint::NewComplaint;
use civik_db::models::feedback::NewFeedback;
use civik_db::repositories::{
    AnonymousComplaintRepo, ComplaintRepo, DepartmentRepo, FeedbackRepo,
};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Confirmation returned to the citizen after a successful submission.
#[derive(Debug, Serialize)]
pub struct IntakeReceipt {
    pub id: DbId,
    /// Citizen-facing code for follow-up enquiries. Absent for feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /public/complaints
// ---------------------------------------------------------------------------

/// Submit a complaint. Returns the reference code on success.
pub async fn submit_complaint(
    State(state): State<AppState>,
    Json(input): Json<NewComplaint>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_department(&state, input.department_id).await?;

    let reference_code = generate_reference_code(REF_PREFIX_COMPLAINT);
    let complaint = ComplaintRepo::create(&state.pool, &input, &reference_code).await?;

    tracing::info!(
        complaint_id = complaint.id,
        department_id = complaint.department_id,
        "Complaint submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: IntakeReceipt {
                id: complaint.id,
                reference_code: Some(complaint.reference_code),
            },
        }),
    ))
}

// ---------------------------------------------------------------------------
// POST /public/feedback
// ---------------------------------------------------------------------------

/// Submit feedback with a 1-5 rating.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(input): Json<NewFeedback>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_department(&state, input.department_id).await?;

    let feedback = FeedbackRepo::create(&state.pool, &input).await?;

    tracing::info!(
        feedback_id = feedback.id,
        department_id = feedback.department_id,
        rating = feedback.rating,
        "Feedback submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: IntakeReceipt {
                id: feedback.id,
                reference_code: None,
            },
        }),
    ))
}

// ---------------------------------------------------------------------------
// POST /public/anonymous-complaints
// ---------------------------------------------------------------------------

/// Submit an anonymous complaint. No identity is collected; the reference
/// code is the citizen's only handle on the record.
pub async fn submit_anonymous_complaint(
    State(state): State<AppState>,
    Json(input): Json<NewAnonymousComplaint>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let reference_code = generate_reference_code(REF_PREFIX_ANONYMOUS);
    let complaint = AnonymousComplaintRepo::create(&state.pool, &input, &reference_code).await?;

    tracing::info!(anonymous_complaint_id = complaint.id, "Anonymous complaint submitted");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: IntakeReceipt {
                id: complaint.id,
                reference_code: Some(complaint.reference_code),
            },
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /public/departments
// ---------------------------------------------------------------------------

/// Department list for the intake form dropdowns.
pub async fn list_departments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let departments = DepartmentRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: departments }))
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// Reject intake routed to a department that does not exist.
async fn require_department(state: &AppState, department_id: DbId) -> Result<(), AppError> {
    DepartmentRepo::find_by_id(&state.pool, department_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "department_id: unknown department {department_id}"
            )))
        })
}

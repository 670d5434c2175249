//! Handler for the triage dashboard summary.
//!
//! One parallel fan-out of reads, visibility-filtered per kind, then pure
//! arithmetic from core. Recomputed on every request; nothing is cached.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use civik_core::reporting::{average_rating, summarize_statuses, StatusSummary};
use civik_core::visibility::filter_visible;
use civik_db::repositories::{
    AnonymousComplaintRepo, ComplaintRepo, DepartmentRepo, FeedbackRepo, UserRepo,
};

use crate::error::AppResult;
use crate::middleware::auth::AuthActor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Aggregated dashboard figures, scoped to what the actor can see.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub complaints: StatusSummary,
    pub anonymous_complaints: StatusSummary,
    pub feedback_total: i64,
    /// Mean feedback rating, absent when no feedback is visible.
    pub average_rating: Option<f64>,
    pub department_count: i64,
    pub active_user_count: i64,
}

/// GET /dashboard/summary
pub async fn summary(
    AuthActor(actor): AuthActor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let (complaints, feedback, anonymous, departments, active_user_count) = futures::try_join!(
        ComplaintRepo::list_all(&state.pool),
        FeedbackRepo::list_all(&state.pool),
        AnonymousComplaintRepo::list_all(&state.pool),
        DepartmentRepo::list_all(&state.pool),
        UserRepo::count_active(&state.pool),
    )?;

    let complaints = filter_visible(&actor, complaints);
    let feedback = filter_visible(&actor, feedback);
    let anonymous = filter_visible(&actor, anonymous);

    let ratings: Vec<i16> = feedback.iter().map(|f| f.rating).collect();

    let summary = DashboardSummary {
        complaints: summarize_statuses(complaints.iter().map(|c| c.status.as_str())),
        anonymous_complaints: summarize_statuses(anonymous.iter().map(|c| c.status.as_str())),
        feedback_total: feedback.len() as i64,
        average_rating: average_rating(&ratings),
        department_count: departments.len() as i64,
        active_user_count,
    };

    Ok(Json(DataResponse { data: summary }))
}

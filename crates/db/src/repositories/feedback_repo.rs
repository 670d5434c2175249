//! Repository for the `feedback` table.

use sqlx::PgPool;

use civik_core::types::DbId;

use crate::models::feedback::{Feedback, NewFeedback};

/// Column list for `feedback` queries.
const COLUMNS: &str =
    "id, department_id, full_name, email, rating, comments, created_at, updated_at";

/// Provides CRUD operations for citizen feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert a new feedback entry, returning the full row.
    pub async fn create(pool: &PgPool, input: &NewFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (department_id, full_name, email, rating, comments) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(input.department_id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(input.rating)
            .bind(&input.comments)
            .fetch_one(pool)
            .await
    }

    /// Find a feedback entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback WHERE id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all feedback entries, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback ORDER BY created_at DESC");
        sqlx::query_as::<_, Feedback>(&query).fetch_all(pool).await
    }
}

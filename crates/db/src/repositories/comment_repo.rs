//! Repository for the `comments` table. Append-only.

use sqlx::PgPool;

use civik_core::types::DbId;

use crate::models::comment::Comment;

/// Column list for `comments` queries.
const COLUMNS: &str = "id, complaint_id, author_id, content, created_at";

/// Provides append and list operations for triage comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Append a comment to a complaint, returning the full row.
    pub async fn create(
        pool: &PgPool,
        complaint_id: DbId,
        author_id: DbId,
        content: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (complaint_id, author_id, content) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(complaint_id)
            .bind(author_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// List a complaint's comments, oldest first.
    pub async fn list_for_complaint(
        pool: &PgPool,
        complaint_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE complaint_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(complaint_id)
            .fetch_all(pool)
            .await
    }
}

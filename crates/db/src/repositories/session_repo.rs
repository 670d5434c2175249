//! Repository for the `sessions` table (refresh tokens).

use sqlx::PgPool;

use civik_core::types::{DbId, Timestamp};

use crate::models::session::Session;

/// Column list for `sessions` queries.
const COLUMNS: &str = "id, user_id, refresh_token_hash, expires_at, revoked_at, created_at";

/// Provides create / lookup / revoke operations for refresh sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Record a new refresh session for a user.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        refresh_token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (user_id, refresh_token_hash, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(user_id)
            .bind(refresh_token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Look up a session by the hash of the presented refresh token.
    pub async fn find_by_token_hash(
        pool: &PgPool,
        refresh_token_hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE refresh_token_hash = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(refresh_token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a session. Returns `true` if a live session was revoked.
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sessions SET revoked_at = now() WHERE id = $1 AND revoked_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Revoke every live session for a user (deactivation, password reset).
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sessions SET revoked_at = now() WHERE user_id = $1 AND revoked_at IS NULL",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}

//! Repository for the `users` table.

use sqlx::PgPool;

use civik_core::types::DbId;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list for `users` queries.
const COLUMNS: &str = "\
    id, username, email, password_hash, role, department_id, \
    is_active, created_at, updated_at";

/// Provides CRUD operations for staff accounts.
pub struct UserRepo;

impl UserRepo {
    /// Create a new user, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, role, department_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .bind(input.department_id)
            .fetch_one(pool)
            .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (login).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by username.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY username");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Update a user's mutable fields. Returns the updated row if found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                email = COALESCE($1, email), \
                role = COALESCE($2, role), \
                department_id = COALESCE($3, department_id), \
                is_active = COALESCE($4, is_active), \
                updated_at = now() \
             WHERE id = $5 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.role)
            .bind(input.department_id)
            .bind(input.is_active)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count active staff accounts (dashboard widget).
    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM users WHERE is_active = TRUE")
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}

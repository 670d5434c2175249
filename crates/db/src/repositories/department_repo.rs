//! Repository for the `departments` table.

use sqlx::PgPool;

use civik_core::types::DbId;

use crate::models::department::{CreateDepartment, Department, UpdateDepartment};

/// Column list for `departments` queries.
const COLUMNS: &str = "id, name, code, description, created_at, updated_at";

/// Provides CRUD operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Create a new department, returning the full row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDepartment,
    ) -> Result<Department, sqlx::Error> {
        let query = format!(
            "INSERT INTO departments (name, code, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a department by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all departments ordered by name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments ORDER BY name");
        sqlx::query_as::<_, Department>(&query).fetch_all(pool).await
    }

    /// Update a department's fields. Returns the updated row if found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDepartment,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!(
            "UPDATE departments SET \
                name = COALESCE($1, name), \
                code = COALESCE($2, code), \
                description = COALESCE($3, description), \
                updated_at = now() \
             WHERE id = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.description)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count submissions of any kind still referencing the department.
    ///
    /// Deletion is refused while this is non-zero.
    pub async fn count_references(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT \
                (SELECT COUNT(*) FROM complaints WHERE department_id = $1) + \
                (SELECT COUNT(*) FROM feedback WHERE department_id = $1) + \
                (SELECT COUNT(*) FROM anonymous_complaints WHERE department_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Delete a department. Returns `true` if a row was removed.
    ///
    /// Callers must check [`Self::count_references`] first; the foreign-key
    /// constraints will also reject a referenced delete at the database
    /// level.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

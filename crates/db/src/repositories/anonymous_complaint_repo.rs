//! Repository for the `anonymous_complaints` table.

use sqlx::PgPool;

use civik_core::types::DbId;

use crate::models::anonymous_complaint::{AnonymousComplaint, NewAnonymousComplaint};

/// Column list for `anonymous_complaints` queries.
const COLUMNS: &str = "\
    id, department_id, complaint_type, description, location, \
    reference_code, attachment_reference, status, created_at, updated_at";

/// Provides CRUD operations for anonymous complaints.
pub struct AnonymousComplaintRepo;

impl AnonymousComplaintRepo {
    /// Insert a new anonymous complaint with the given reference code.
    /// `department_id` starts NULL; a triager assigns it later.
    pub async fn create(
        pool: &PgPool,
        input: &NewAnonymousComplaint,
        reference_code: &str,
    ) -> Result<AnonymousComplaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO anonymous_complaints \
                (complaint_type, description, location, reference_code, attachment_reference) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnonymousComplaint>(&query)
            .bind(&input.complaint_type)
            .bind(&input.description)
            .bind(&input.location)
            .bind(reference_code)
            .bind(&input.attachment_reference)
            .fetch_one(pool)
            .await
    }

    /// Find an anonymous complaint by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AnonymousComplaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM anonymous_complaints WHERE id = $1");
        sqlx::query_as::<_, AnonymousComplaint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all anonymous complaints, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<AnonymousComplaint>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM anonymous_complaints ORDER BY created_at DESC");
        sqlx::query_as::<_, AnonymousComplaint>(&query)
            .fetch_all(pool)
            .await
    }

    /// Set an anonymous complaint's status, refreshing `updated_at`.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<AnonymousComplaint>, sqlx::Error> {
        let query = format!(
            "UPDATE anonymous_complaints SET status = $1, updated_at = now() \
             WHERE id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnonymousComplaint>(&query)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Assign or reassign an anonymous complaint to a department.
    pub async fn update_department(
        pool: &PgPool,
        id: DbId,
        department_id: DbId,
    ) -> Result<Option<AnonymousComplaint>, sqlx::Error> {
        let query = format!(
            "UPDATE anonymous_complaints SET department_id = $1, updated_at = now() \
             WHERE id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnonymousComplaint>(&query)
            .bind(department_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

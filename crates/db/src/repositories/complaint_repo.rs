//! Repository for the `complaints` table.

use sqlx::PgPool;

use civik_core::types::DbId;

use crate::models::complaint::{Complaint, NewComplaint};

/// Column list for `complaints` queries.
const COLUMNS: &str = "\
    id, department_id, full_name, email, phone, complaint_type, details, \
    location, reference_code, attachment_reference, status, created_at, updated_at";

/// Provides CRUD operations for complaints.
pub struct ComplaintRepo;

impl ComplaintRepo {
    /// Insert a new complaint with the given reference code, returning the
    /// full row. `status` defaults to `pending` at the schema level.
    pub async fn create(
        pool: &PgPool,
        input: &NewComplaint,
        reference_code: &str,
    ) -> Result<Complaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaints \
                (department_id, full_name, email, phone, complaint_type, \
                 details, location, reference_code, attachment_reference) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(input.department_id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.complaint_type)
            .bind(&input.details)
            .bind(&input.location)
            .bind(reference_code)
            .bind(&input.attachment_reference)
            .fetch_one(pool)
            .await
    }

    /// Find a complaint by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints WHERE id = $1");
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all complaints, newest first. Visibility filtering, search, and
    /// pagination happen in core over the fetched rows.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints ORDER BY created_at DESC");
        sqlx::query_as::<_, Complaint>(&query).fetch_all(pool).await
    }

    /// Set a complaint's status, refreshing `updated_at` in the same round
    /// trip. Returns the updated row if found.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!(
            "UPDATE complaints SET status = $1, updated_at = now() \
             WHERE id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Reassign a complaint to a department. Returns the updated row if found.
    pub async fn update_department(
        pool: &PgPool,
        id: DbId,
        department_id: DbId,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!(
            "UPDATE complaints SET department_id = $1, updated_at = now() \
             WHERE id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(department_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

//! Department entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use civik_core::types::{DbId, Timestamp};

/// A row from the `departments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    /// Short routing code, e.g. `SAN` for sanitation. Unique.
    pub code: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a department.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartment {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 16))]
    pub code: String,
    pub description: Option<String>,
}

/// DTO for updating a department. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartment {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 16))]
    pub code: Option<String>,
    pub description: Option<String>,
}

//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use civik_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    /// Role name, one of `administrator`, `department_head`, `staff`.
    pub role: String,
    /// Department scope for department heads; NULL otherwise.
    pub department_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub department_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            role: u.role,
            department_id: u.department_id,
            is_active: u.is_active,
            created_at: u.created_at,
        }
    }
}

/// DTO for inserting a new user. The password is hashed by the API layer
/// before this struct is built.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub department_id: Option<DbId>,
}

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 12, max = 128))]
    pub password: String,
    pub role: String,
    pub department_id: Option<DbId>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub role: Option<String>,
    pub department_id: Option<DbId>,
    pub is_active: Option<bool>,
}

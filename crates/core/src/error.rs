use crate::types::DbId;

/// Domain error taxonomy shared by the repository and API layers.
///
/// `NotFound` deliberately carries no hint of *why* a record is absent: a
/// row that exists but is outside the caller's visibility scope produces a
/// value identical to one for a row that never existed.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

//! Triage comment entity model.
//!
//! Comments attach to complaints only, are authored by authenticated
//! actors, and are append-only: there is no update or delete path.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use civik_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub complaint_id: DbId,
    pub author_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for `POST /complaints/{id}/comments`.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub content: String,
}

//! Anonymous complaint entity model and DTOs.
//!
//! No submitter identity is collected. Intake leaves `department_id` NULL;
//! an administrator assigns a department during triage, at which point the
//! record becomes visible to that department's head.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use civik_core::triage::TriageRecord;
use civik_core::types::{DbId, Timestamp};
use civik_core::visibility::DepartmentScoped;

/// A row from the `anonymous_complaints` table.
#[derive(Debug, Clone, FromRow)]
pub struct AnonymousComplaint {
    pub id: DbId,
    pub department_id: Option<DbId>,
    pub complaint_type: String,
    pub description: String,
    pub location: String,
    /// Citizen-facing confirmation code, e.g. `ANC-4F1A9C2B`. Unique.
    pub reference_code: String,
    pub attachment_reference: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DepartmentScoped for AnonymousComplaint {
    fn department_id(&self) -> Option<DbId> {
        self.department_id
    }
}

impl TriageRecord for AnonymousComplaint {
    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.complaint_type.as_str(),
            self.description.as_str(),
            self.location.as_str(),
            self.reference_code.as_str(),
        ]
    }
}

/// Triage-facing representation of an anonymous complaint.
#[derive(Debug, Clone, Serialize)]
pub struct AnonymousComplaintResponse {
    pub id: DbId,
    pub department_id: Option<DbId>,
    pub complaint_type: String,
    pub description: String,
    pub location: String,
    pub reference_code: String,
    pub has_attachment: bool,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AnonymousComplaint> for AnonymousComplaintResponse {
    fn from(c: AnonymousComplaint) -> Self {
        Self {
            id: c.id,
            department_id: c.department_id,
            complaint_type: c.complaint_type,
            description: c.description,
            location: c.location,
            reference_code: c.reference_code,
            has_attachment: c.attachment_reference.is_some(),
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Citizen intake DTO for `POST /public/anonymous-complaints`.
#[derive(Debug, Deserialize, Validate)]
pub struct NewAnonymousComplaint {
    #[validate(length(min = 1, max = 255))]
    pub complaint_type: String,
    #[validate(length(min = 1, max = 10000))]
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    pub attachment_reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_fields_are_rejected() {
        let intake = NewAnonymousComplaint {
            complaint_type: String::new(),
            description: "Fly tipping behind the depot".to_string(),
            location: String::new(),
            attachment_reference: None,
        };
        let errors = intake.validate().expect_err("empty fields should fail");
        let fields = errors.field_errors();
        assert!(fields.contains_key("complaint_type"));
        assert!(fields.contains_key("location"));
        assert!(!fields.contains_key("description"));
    }
}

//! Complaint entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use civik_core::triage::TriageRecord;
use civik_core::types::{DbId, Timestamp};
use civik_core::visibility::DepartmentScoped;

/// A row from the `complaints` table.
#[derive(Debug, Clone, FromRow)]
pub struct Complaint {
    pub id: DbId,
    pub department_id: Option<DbId>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub complaint_type: String,
    pub details: String,
    pub location: Option<String>,
    /// Citizen-facing confirmation code, e.g. `CMP-4F1A9C2B`. Unique.
    pub reference_code: String,
    /// Opaque blob reference handed over by the upload widget. Never
    /// serialized outward; triage views only see [`ComplaintResponse::has_attachment`].
    pub attachment_reference: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DepartmentScoped for Complaint {
    fn department_id(&self) -> Option<DbId> {
        self.department_id
    }
}

impl TriageRecord for Complaint {
    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.full_name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.complaint_type.as_str(),
            self.details.as_str(),
            self.reference_code.as_str(),
        ];
        if let Some(ref location) = self.location {
            fields.push(location);
        }
        fields
    }
}

/// Triage-facing representation of a complaint.
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintResponse {
    pub id: DbId,
    pub department_id: Option<DbId>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub complaint_type: String,
    pub details: String,
    pub location: Option<String>,
    pub reference_code: String,
    pub has_attachment: bool,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Complaint> for ComplaintResponse {
    fn from(c: Complaint) -> Self {
        Self {
            id: c.id,
            department_id: c.department_id,
            full_name: c.full_name,
            email: c.email,
            phone: c.phone,
            complaint_type: c.complaint_type,
            details: c.details,
            location: c.location,
            reference_code: c.reference_code,
            has_attachment: c.attachment_reference.is_some(),
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Citizen intake DTO for `POST /public/complaints`.
#[derive(Debug, Deserialize, Validate)]
pub struct NewComplaint {
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 3, max = 50))]
    pub phone: String,
    /// The department the citizen routed the complaint to. Must exist.
    pub department_id: DbId,
    #[validate(length(min = 1, max = 255))]
    pub complaint_type: String,
    #[validate(length(min = 1, max = 10000))]
    pub details: String,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    pub attachment_reference: Option<String>,
}

/// DTO for `PUT /complaints/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateSubmissionStatus {
    pub status: String,
}

/// DTO for `PUT /complaints/{id}/department`.
#[derive(Debug, Deserialize)]
pub struct ReassignDepartment {
    pub department_id: DbId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_intake() -> NewComplaint {
        NewComplaint {
            full_name: "Ada Citizen".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0101".to_string(),
            department_id: 1,
            complaint_type: "Roads".to_string(),
            details: "Pothole on Main Street".to_string(),
            location: Some("Main St & 3rd Ave".to_string()),
            attachment_reference: None,
        }
    }

    #[test]
    fn valid_intake_passes_validation() {
        assert!(valid_intake().validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected_with_field_error() {
        let mut intake = valid_intake();
        intake.email = "not-an-email".to_string();
        let errors = intake.validate().expect_err("email should fail");
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn empty_required_fields_are_rejected() {
        let mut intake = valid_intake();
        intake.full_name = String::new();
        intake.details = String::new();
        let errors = intake.validate().expect_err("empty fields should fail");
        let fields = errors.field_errors();
        assert!(fields.contains_key("full_name"));
        assert!(fields.contains_key("details"));
    }

    #[test]
    fn attachment_presence_becomes_a_boolean() {
        let row = Complaint {
            id: 1,
            department_id: Some(1),
            full_name: "Ada Citizen".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0101".to_string(),
            complaint_type: "Roads".to_string(),
            details: "Pothole".to_string(),
            location: None,
            reference_code: "CMP-AAAA1111".to_string(),
            attachment_reference: Some("blob/2026/07/abc123".to_string()),
            status: "pending".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let response = ComplaintResponse::from(row);
        assert!(response.has_attachment);
    }
}

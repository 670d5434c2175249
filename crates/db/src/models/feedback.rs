//! Feedback entity model and DTOs.
//!
//! Feedback carries a 1-5 rating and no status lifecycle; triage views
//! read it but never mutate it.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use civik_core::triage::TriageRecord;
use civik_core::types::{DbId, Timestamp};
use civik_core::visibility::DepartmentScoped;

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub department_id: Option<DbId>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub rating: i16,
    pub comments: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DepartmentScoped for Feedback {
    fn department_id(&self) -> Option<DbId> {
        self.department_id
    }
}

impl TriageRecord for Feedback {
    fn status(&self) -> Option<&str> {
        None
    }

    fn search_fields(&self) -> Vec<&str> {
        self.full_name
            .as_deref()
            .into_iter()
            .chain(self.email.as_deref())
            .chain(self.comments.as_deref())
            .collect()
    }
}

/// Citizen intake DTO for `POST /public/feedback`.
#[derive(Debug, Deserialize, Validate)]
pub struct NewFeedback {
    /// The department the feedback concerns. Must exist.
    pub department_id: DbId,
    #[validate(range(min = 1, max = 5))]
    pub rating: i16,
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 10000))]
    pub comments: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use civik_core::submission::{MAX_RATING, MIN_RATING};

    fn valid_intake() -> NewFeedback {
        NewFeedback {
            department_id: 1,
            rating: 4,
            full_name: None,
            email: None,
            comments: Some("Quick and friendly service".to_string()),
        }
    }

    #[test]
    fn valid_feedback_passes_validation() {
        assert!(valid_intake().validate().is_ok());
    }

    #[test]
    fn rating_out_of_range_is_rejected_naming_the_field() {
        for rating in [MIN_RATING - 1, MAX_RATING + 1, -2] {
            let mut intake = valid_intake();
            intake.rating = rating;
            let errors = intake.validate().expect_err("rating should fail");
            assert!(
                errors.field_errors().contains_key("rating"),
                "error for rating {rating} should name the rating field"
            );
        }
    }

    #[test]
    fn search_fields_skip_absent_optionals() {
        let row = Feedback {
            id: 1,
            department_id: Some(1),
            full_name: None,
            email: None,
            rating: 5,
            comments: Some("great".to_string()),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert_eq!(row.search_fields(), vec!["great"]);
    }
}

//! Submission status constants, transition rules, and reference codes.
//!
//! The status field is shared by complaints and anonymous complaints;
//! feedback entries carry no status.

use uuid::Uuid;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status assigned to every new submission.
pub const STATUS_PENDING: &str = "pending";
/// A triager has picked the submission up.
pub const STATUS_IN_PROGRESS: &str = "in_progress";
/// The underlying issue was addressed.
pub const STATUS_RESOLVED: &str = "resolved";
/// The submission was declined.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid submission statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_IN_PROGRESS,
    STATUS_RESOLVED,
    STATUS_REJECTED,
];

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid submission status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

/// Validate a status transition from `current` to `next`.
///
/// Every pair of known statuses is a legal transition, including re-opening
/// a resolved or rejected submission and no-op transitions to the current
/// status. Triage staff correct mislabeled records often enough that a
/// forward-only machine would get in the way; the only thing rejected here
/// is an unknown status name on either side.
pub fn validate_transition(current: &str, next: &str) -> Result<(), CoreError> {
    validate_status(current)?;
    validate_status(next)
}

// ---------------------------------------------------------------------------
// Feedback ratings
// ---------------------------------------------------------------------------

/// Lowest accepted feedback rating.
pub const MIN_RATING: i16 = 1;
/// Highest accepted feedback rating.
pub const MAX_RATING: i16 = 5;

// ---------------------------------------------------------------------------
// Reference codes
// ---------------------------------------------------------------------------

/// Reference code prefix for complaints.
pub const REF_PREFIX_COMPLAINT: &str = "CMP";
/// Reference code prefix for anonymous complaints.
pub const REF_PREFIX_ANONYMOUS: &str = "ANC";

/// Generate a citizen-facing reference code, e.g. `CMP-4F1A9C2B`.
///
/// The suffix is the first 8 hex digits of a UUIDv4, uppercased. Uniqueness
/// is enforced by the database's unique index on `reference_code`; the
/// collision odds at municipal volumes are negligible.
pub fn generate_reference_code(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, id[..8].to_uppercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_statuses_are_valid() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok(), "status '{s}' should be valid");
        }
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert!(validate_status("open").is_err());
        assert!(validate_status("").is_err());
        assert!(validate_status("Pending").is_err());
    }

    #[test]
    fn every_pair_of_known_statuses_is_a_legal_transition() {
        for from in VALID_STATUSES {
            for to in VALID_STATUSES {
                assert!(
                    validate_transition(from, to).is_ok(),
                    "transition '{from}' -> '{to}' should be legal"
                );
            }
        }
    }

    #[test]
    fn transition_involving_unknown_status_is_rejected() {
        assert!(validate_transition(STATUS_PENDING, "closed").is_err());
        assert!(validate_transition("closed", STATUS_PENDING).is_err());
    }

    #[test]
    fn reference_code_has_prefix_and_short_suffix() {
        let code = generate_reference_code(REF_PREFIX_COMPLAINT);
        assert!(code.starts_with("CMP-"));
        let suffix = &code["CMP-".len()..];
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(suffix, suffix.to_uppercase());
    }

    #[test]
    fn reference_codes_differ_between_calls() {
        let a = generate_reference_code(REF_PREFIX_ANONYMOUS);
        let b = generate_reference_code(REF_PREFIX_ANONYMOUS);
        assert_ne!(a, b);
    }
}

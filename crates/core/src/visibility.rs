//! Department-scoped visibility rules.
//!
//! The portal has exactly one scoping attribute: a submission's
//! `department_id`. Rather than re-stating the role check in every list and
//! detail handler, the rule lives here as a pure function applied to
//! already-fetched rows, identically for complaints, feedback, and
//! anonymous complaints.

use crate::error::CoreError;
use crate::roles::{ROLE_ADMINISTRATOR, ROLE_DEPARTMENT_HEAD};
use crate::types::DbId;

/// The authenticated identity performing an operation.
///
/// Built by the API layer from the access token claims; nothing in this
/// crate ever resolves one itself.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: DbId,
    /// Role name, one of [`crate::roles::VALID_ROLES`].
    pub role: String,
    /// Department scope. Only meaningful for department heads.
    pub department_id: Option<DbId>,
}

/// Anything routed to a department and subject to visibility scoping.
pub trait DepartmentScoped {
    /// The department this record is assigned to, if any.
    fn department_id(&self) -> Option<DbId>;
}

/// Whether `actor` may see a single record.
///
/// - `administrator`: everything, including unassigned records.
/// - `department_head` with a department: records assigned to it.
/// - anyone else (`staff`, or a department head without a department):
///   nothing.
pub fn visible<T: DepartmentScoped>(actor: &Actor, record: &T) -> bool {
    match actor.role.as_str() {
        ROLE_ADMINISTRATOR => true,
        ROLE_DEPARTMENT_HEAD => match actor.department_id {
            Some(dept) => record.department_id() == Some(dept),
            None => false,
        },
        _ => false,
    }
}

/// Restrict `records` to the subset `actor` may see, preserving order.
pub fn filter_visible<T: DepartmentScoped>(actor: &Actor, records: Vec<T>) -> Vec<T> {
    records
        .into_iter()
        .filter(|r| visible(actor, r))
        .collect()
}

/// Collapse "row does not exist" and "row exists but is out of scope" into
/// one `NotFound` value, so callers cannot probe for records in other
/// departments.
pub fn visible_or_not_found<T: DepartmentScoped>(
    actor: &Actor,
    record: Option<T>,
    entity: &'static str,
    id: DbId,
) -> Result<T, CoreError> {
    match record {
        Some(r) if visible(actor, &r) => Ok(r),
        _ => Err(CoreError::NotFound { entity, id }),
    }
}

/// Mutation policy: any actor who can see a record may modify it (status,
/// department assignment, comments). There is no separate write capability;
/// staff see nothing and therefore can change nothing.
pub fn can_modify<T: DepartmentScoped>(actor: &Actor, record: &T) -> bool {
    visible(actor, record)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::ROLE_STAFF;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: DbId,
        department_id: Option<DbId>,
    }

    impl DepartmentScoped for Row {
        fn department_id(&self) -> Option<DbId> {
            self.department_id
        }
    }

    fn admin() -> Actor {
        Actor {
            user_id: 1,
            role: ROLE_ADMINISTRATOR.to_string(),
            department_id: None,
        }
    }

    fn head_of(dept: DbId) -> Actor {
        Actor {
            user_id: 2,
            role: ROLE_DEPARTMENT_HEAD.to_string(),
            department_id: Some(dept),
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, department_id: Some(10) },
            Row { id: 2, department_id: Some(20) },
            Row { id: 3, department_id: None },
            Row { id: 4, department_id: Some(10) },
        ]
    }

    #[test]
    fn administrator_sees_everything() {
        let all = rows();
        let filtered = filter_visible(&admin(), all.clone());
        assert_eq!(filtered, all);
    }

    #[test]
    fn department_head_sees_only_their_department() {
        let filtered = filter_visible(&head_of(10), rows());
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.department_id == Some(10)));
    }

    #[test]
    fn department_head_does_not_see_unassigned_records() {
        let filtered = filter_visible(&head_of(10), rows());
        assert!(!filtered.iter().any(|r| r.department_id.is_none()));
    }

    #[test]
    fn department_head_without_department_sees_nothing() {
        let actor = Actor {
            user_id: 3,
            role: ROLE_DEPARTMENT_HEAD.to_string(),
            department_id: None,
        };
        assert!(filter_visible(&actor, rows()).is_empty());
    }

    #[test]
    fn staff_sees_nothing() {
        let actor = Actor {
            user_id: 4,
            role: ROLE_STAFF.to_string(),
            department_id: Some(10),
        };
        assert!(filter_visible(&actor, rows()).is_empty());
    }

    #[test]
    fn filter_preserves_input_order() {
        let filtered = filter_visible(&head_of(10), rows());
        let ids: Vec<DbId> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn missing_and_out_of_scope_produce_identical_not_found() {
        let actor = head_of(10);
        let out_of_scope = Row { id: 7, department_id: Some(20) };

        let missing = visible_or_not_found::<Row>(&actor, None, "Complaint", 7);
        let hidden = visible_or_not_found(&actor, Some(out_of_scope), "Complaint", 7);

        let missing_msg = missing.expect_err("missing row must be NotFound").to_string();
        let hidden_msg = hidden.expect_err("hidden row must be NotFound").to_string();
        assert_eq!(missing_msg, hidden_msg);
    }

    #[test]
    fn in_scope_record_passes_through() {
        let actor = head_of(10);
        let row = Row { id: 9, department_id: Some(10) };
        let got = visible_or_not_found(&actor, Some(row.clone()), "Complaint", 9)
            .expect("in-scope row should resolve");
        assert_eq!(got, row);
    }

    #[test]
    fn modification_follows_visibility() {
        let row = Row { id: 1, department_id: Some(10) };
        assert!(can_modify(&admin(), &row));
        assert!(can_modify(&head_of(10), &row));
        assert!(!can_modify(&head_of(20), &row));
    }
}

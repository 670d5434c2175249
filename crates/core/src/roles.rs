//! Well-known role name constants.
//!
//! These must match the `ck_users_role` constraint in
//! `20260715000005_create_users_table.sql`.

/// Unscoped; sees and administers everything.
pub const ROLE_ADMINISTRATOR: &str = "administrator";
/// Scoped to a single department via `users.department_id`.
pub const ROLE_DEPARTMENT_HEAD: &str = "department_head";
/// Authenticated but unscoped; sees no department-scoped records.
pub const ROLE_STAFF: &str = "staff";

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMINISTRATOR, ROLE_DEPARTMENT_HEAD, ROLE_STAFF];

/// Check whether a role name is one of the known roles.
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        for r in VALID_ROLES {
            assert!(is_valid_role(r), "role '{r}' should be valid");
        }
    }

    #[test]
    fn unknown_roles_are_invalid() {
        assert!(!is_valid_role("superuser"));
        assert!(!is_valid_role(""));
        assert!(!is_valid_role("Administrator"));
    }
}

//! Request handlers, one module per resource.

pub mod anonymous_complaints;
pub mod auth;
pub mod complaints;
pub mod dashboard;
pub mod departments;
pub mod feedback;
pub mod public;
pub mod users;

use std::collections::HashMap;

use civik_core::types::DbId;
use civik_db::models::department::Department;

/// Build an id -> name lookup from a fetched department list.
///
/// The triage list pipeline resolves department names through this map so
/// the search term can match them; no join is issued.
pub(crate) fn department_name_map(departments: &[Department]) -> HashMap<DbId, String> {
    departments
        .iter()
        .map(|d| (d.id, d.name.clone()))
        .collect()
}

//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters accepted by every triage list endpoint
/// (`?search=&status=&page=&page_size=`).
///
/// `page` is 1-indexed; `page_size` defaults to 10. Both are clamped in
/// core. `status=all` (or omitting it) disables the status filter; the
/// feedback list ignores it entirely since feedback has no status.
#[derive(Debug, Deserialize)]
pub struct TriageListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

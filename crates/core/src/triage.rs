//! The triage list pipeline: visibility filter, search, status filter,
//! pagination.
//!
//! List views fetch every row of a kind (newest first) and hand the vector
//! to [`list_page`]. Keeping the whole pipeline in core means the exact
//! behaviour the views expose -- match-any-field search, post-filter
//! totals, 1-indexed slicing -- is testable without a database.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;
use crate::visibility::{filter_visible, Actor, DepartmentScoped};

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of rows per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Status filter value meaning "no filter".
pub const STATUS_FILTER_ALL: &str = "all";

/// Clamp a user-provided 1-indexed page number.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a user-provided page size to `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(page_size: Option<i64>) -> i64 {
    page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

// ---------------------------------------------------------------------------
// Searchable records
// ---------------------------------------------------------------------------

/// A submission kind that the triage list views can display.
pub trait TriageRecord: DepartmentScoped {
    /// The lifecycle status, or `None` for kinds without one (feedback).
    fn status(&self) -> Option<&str>;

    /// The text fields the search term is matched against. The resolved
    /// department name is appended by the pipeline, not listed here.
    fn search_fields(&self) -> Vec<&str>;
}

/// Case-insensitive substring match across a record's text fields plus its
/// resolved department name. A record matches if *any* field contains the
/// (already lowercased) needle.
pub fn matches_search<T: TriageRecord>(
    record: &T,
    department_name: Option<&str>,
    needle_lower: &str,
) -> bool {
    record
        .search_fields()
        .into_iter()
        .chain(department_name)
        .any(|field| field.to_lowercase().contains(needle_lower))
}

// ---------------------------------------------------------------------------
// Page assembly
// ---------------------------------------------------------------------------

/// One page of triage results.
///
/// `total_count` is the post-filter, pre-pagination count, so clients can
/// render page controls without a second query.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
}

/// Run the full list pipeline over already-fetched rows.
///
/// Order of operations: visibility filter, search term (trimmed; blank
/// means no search), status filter (`None`, empty, or `"all"` means no
/// filter), then slicing to the requested page. Input order is preserved
/// throughout, so rows fetched newest-first stay newest-first.
pub fn list_page<T, F>(
    actor: &Actor,
    records: Vec<T>,
    search: Option<&str>,
    status: Option<&str>,
    page: Option<i64>,
    page_size: Option<i64>,
    department_name: F,
) -> Page<T>
where
    T: TriageRecord,
    F: Fn(DbId) -> Option<String>,
{
    let page = clamp_page(page);
    let page_size = clamp_page_size(page_size);

    let mut rows = filter_visible(actor, records);

    if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
        let needle = term.to_lowercase();
        rows.retain(|r| {
            let dept = r.department_id().and_then(&department_name);
            matches_search(r, dept.as_deref(), &needle)
        });
    }

    if let Some(wanted) = status.filter(|s| !s.is_empty() && *s != STATUS_FILTER_ALL) {
        rows.retain(|r| r.status() == Some(wanted));
    }

    let total_count = rows.len() as i64;
    let start = ((page - 1) * page_size) as usize;
    let items = if start >= rows.len() {
        Vec::new()
    } else {
        rows.into_iter().skip(start).take(page_size as usize).collect()
    };

    Page {
        items,
        total_count,
        page,
        page_size,
    }
}

// ---------------------------------------------------------------------------
// Triage comments
// ---------------------------------------------------------------------------

/// Maximum length for a triage comment.
pub const MAX_COMMENT_LENGTH: usize = 5_000;

/// Validate triage comment content: non-empty after trimming, within the
/// length bound. Returns the trimmed content to persist.
pub fn validate_comment_content(content: &str) -> Result<&str, CoreError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "content: comment must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "content: comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(trimmed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{ROLE_ADMINISTRATOR, ROLE_DEPARTMENT_HEAD};
    use crate::submission::{STATUS_PENDING, STATUS_RESOLVED};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: DbId,
        department_id: Option<DbId>,
        status: &'static str,
        subject: &'static str,
        body: &'static str,
    }

    impl DepartmentScoped for Row {
        fn department_id(&self) -> Option<DbId> {
            self.department_id
        }
    }

    impl TriageRecord for Row {
        fn status(&self) -> Option<&str> {
            Some(self.status)
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.subject, self.body]
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

    fn row(id: DbId, dept: Option<DbId>, status: &'static str) -> Row {
        Row {
            id,
            department_id: dept,
            status,
            subject: "Pothole on Main Street",
            body: "Deep pothole near the bus stop",
        }
    }

    fn no_dept_names(_: DbId) -> Option<String> {
        None
    }

    // -- pagination ----------------------------------------------------------

    #[test]
    fn pages_concatenate_to_the_full_filtered_set() {
        let records: Vec<Row> = (1..=23).map(|i| row(i, Some(1), STATUS_PENDING)).collect();
        let expected_ids: Vec<DbId> = (1..=23).collect();

        let mut seen = Vec::new();
        for page in 1..=5 {
            let p = list_page(
                &admin(),
                records.clone(),
                None,
                None,
                Some(page),
                Some(5),
                no_dept_names,
            );
            assert_eq!(p.total_count, 23);
            let expected_len = (23 - (page - 1) * 5).clamp(0, 5);
            assert_eq!(p.items.len() as i64, expected_len, "page {page}");
            seen.extend(p.items.iter().map(|r| r.id));
        }
        assert_eq!(seen, expected_ids);
    }

    #[test]
    fn page_past_the_end_is_empty_but_keeps_the_total() {
        let records: Vec<Row> = (1..=3).map(|i| row(i, Some(1), STATUS_PENDING)).collect();
        let p = list_page(&admin(), records, None, None, Some(9), Some(10), no_dept_names);
        assert!(p.items.is_empty());
        assert_eq!(p.total_count, 3);
    }

    #[test]
    fn page_and_page_size_are_clamped() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-3)), 1);
        assert_eq!(clamp_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(0)), 1);
        assert_eq!(clamp_page_size(Some(500)), MAX_PAGE_SIZE);
    }

    // -- visibility through the pipeline ------------------------------------

    #[test]
    fn department_head_list_is_scoped_to_their_department() {
        let c1 = row(1, Some(1), STATUS_PENDING);
        let c2 = row(2, Some(2), STATUS_PENDING);

        let p = list_page(
            &head_of(1),
            vec![c1.clone(), c2],
            None,
            None,
            None,
            None,
            no_dept_names,
        );
        assert_eq!(p.items, vec![c1]);
        assert_eq!(p.total_count, 1);
    }

    // -- search --------------------------------------------------------------

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = vec![row(1, Some(1), STATUS_PENDING)];
        let p = list_page(
            &admin(),
            records,
            Some("POTHOLE"),
            None,
            None,
            None,
            no_dept_names,
        );
        assert_eq!(p.total_count, 1);
    }

    #[test]
    fn search_matches_any_field() {
        // "bus stop" only appears in the body, not the subject.
        let records = vec![row(1, Some(1), STATUS_PENDING)];
        let p = list_page(
            &admin(),
            records,
            Some("bus stop"),
            None,
            None,
            None,
            no_dept_names,
        );
        assert_eq!(p.total_count, 1);
    }

    #[test]
    fn search_matches_resolved_department_name() {
        let records = vec![row(1, Some(7), STATUS_PENDING)];
        let dept_name = |id: DbId| (id == 7).then(|| "Sanitation".to_string());

        let hit = list_page(
            &admin(),
            records.clone(),
            Some("sanit"),
            None,
            None,
            None,
            dept_name,
        );
        assert_eq!(hit.total_count, 1);

        let miss = list_page(&admin(), records, Some("sanit"), None, None, None, no_dept_names);
        assert_eq!(miss.total_count, 0);
    }

    #[test]
    fn non_matching_search_returns_nothing() {
        let records = vec![row(1, Some(1), STATUS_PENDING)];
        let p = list_page(
            &admin(),
            records,
            Some("streetlight"),
            None,
            None,
            None,
            no_dept_names,
        );
        assert_eq!(p.total_count, 0);
        assert!(p.items.is_empty());
    }

    #[test]
    fn blank_search_term_is_ignored() {
        let records = vec![row(1, Some(1), STATUS_PENDING)];
        let p = list_page(&admin(), records, Some("   "), None, None, None, no_dept_names);
        assert_eq!(p.total_count, 1);
    }

    // -- status filter -------------------------------------------------------

    #[test]
    fn status_filter_is_exact_equality() {
        let records = vec![
            row(1, Some(1), STATUS_PENDING),
            row(2, Some(1), STATUS_RESOLVED),
            row(3, Some(1), STATUS_PENDING),
        ];
        let p = list_page(
            &admin(),
            records,
            None,
            Some(STATUS_PENDING),
            None,
            None,
            no_dept_names,
        );
        assert_eq!(p.total_count, 2);
        assert!(p.items.iter().all(|r| r.status == STATUS_PENDING));
    }

    #[test]
    fn status_filter_all_means_no_filter() {
        let records = vec![
            row(1, Some(1), STATUS_PENDING),
            row(2, Some(1), STATUS_RESOLVED),
        ];
        let p = list_page(
            &admin(),
            records,
            None,
            Some(STATUS_FILTER_ALL),
            None,
            None,
            no_dept_names,
        );
        assert_eq!(p.total_count, 2);
    }

    #[test]
    fn input_order_is_preserved_into_pages() {
        let records = vec![
            row(5, Some(1), STATUS_PENDING),
            row(3, Some(1), STATUS_PENDING),
            row(9, Some(1), STATUS_PENDING),
        ];
        let p = list_page(&admin(), records, None, None, None, None, no_dept_names);
        let ids: Vec<DbId> = p.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }

    // -- comments ------------------------------------------------------------

    #[test]
    fn comment_content_is_trimmed() {
        let content =
            validate_comment_content("  needs a site visit  ").expect("valid comment should pass");
        assert_eq!(content, "needs a site visit");
    }

    #[test]
    fn empty_and_whitespace_comments_are_rejected() {
        assert!(validate_comment_content("").is_err());
        assert!(validate_comment_content("   \t\n").is_err());
    }

    #[test]
    fn oversized_comments_are_rejected() {
        let content = "a".repeat(MAX_COMMENT_LENGTH + 1);
        assert!(validate_comment_content(&content).is_err());
    }
}

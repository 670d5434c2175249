//! Dashboard arithmetic: per-status counts, resolution rate, average
//! feedback rating.
//!
//! Computed from freshly fetched, visibility-filtered rows on every
//! request. No caching, no incremental state.

use serde::Serialize;

use crate::submission::{STATUS_IN_PROGRESS, STATUS_PENDING, STATUS_REJECTED, STATUS_RESOLVED};

/// Per-status counts and resolution rate for one submission kind.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct StatusSummary {
    pub total: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
    pub rejected: i64,
    /// `resolved / total`, or `0.0` for an empty set.
    pub resolution_rate: f64,
}

/// Tally statuses into a [`StatusSummary`].
///
/// Unknown status strings still count toward `total` so the dashboard
/// never under-reports volume, but they land in no bucket.
pub fn summarize_statuses<'a, I>(statuses: I) -> StatusSummary
where
    I: IntoIterator<Item = &'a str>,
{
    let mut summary = StatusSummary::default();
    for status in statuses {
        summary.total += 1;
        match status {
            STATUS_PENDING => summary.pending += 1,
            STATUS_IN_PROGRESS => summary.in_progress += 1,
            STATUS_RESOLVED => summary.resolved += 1,
            STATUS_REJECTED => summary.rejected += 1,
            _ => {}
        }
    }
    if summary.total > 0 {
        summary.resolution_rate = summary.resolved as f64 / summary.total as f64;
    }
    summary
}

/// Mean of the given ratings, or `None` for an empty set.
pub fn average_rating(ratings: &[i16]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    Some(sum as f64 / ratings.len() as f64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_counts_each_bucket() {
        let statuses = vec![
            "pending",
            "pending",
            "in_progress",
            "resolved",
            "resolved",
            "resolved",
            "rejected",
        ];
        let summary = summarize_statuses(statuses);
        assert_eq!(summary.total, 7);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.resolved, 3);
        assert_eq!(summary.rejected, 1);
        assert!((summary.resolution_rate - 3.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn empty_set_has_zero_rate_not_nan() {
        let summary = summarize_statuses(std::iter::empty::<&str>());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.resolution_rate, 0.0);
    }

    #[test]
    fn unknown_statuses_count_toward_total_only() {
        let summary = summarize_statuses(vec!["pending", "archived"]);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.pending, 1);
        assert_eq!(
            summary.in_progress + summary.resolved + summary.rejected,
            0
        );
    }

    #[test]
    fn average_rating_is_the_mean() {
        assert_eq!(average_rating(&[4, 5, 3]), Some(4.0));
        assert_eq!(average_rating(&[1]), Some(1.0));
    }

    #[test]
    fn average_rating_of_nothing_is_none() {
        assert_eq!(average_rating(&[]), None);
    }
}

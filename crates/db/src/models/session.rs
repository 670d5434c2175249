//! Refresh-token session entity model.
//!
//! Only the SHA-256 hash of a refresh token is stored; see the API layer's
//! auth module for generation and hashing.

use sqlx::FromRow;

use civik_core::types::{DbId, Timestamp};

/// A row from the `sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Session {
    /// A session is usable while unrevoked and unexpired.
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn session(expires_in: Duration, revoked: bool) -> Session {
        let now = Utc::now();
        Session {
            id: 1,
            user_id: 1,
            refresh_token_hash: "abc".to_string(),
            expires_at: now + expires_in,
            revoked_at: revoked.then_some(now),
            created_at: now,
        }
    }

    #[test]
    fn live_session_is_valid() {
        assert!(session(Duration::days(1), false).is_valid_at(Utc::now()));
    }

    #[test]
    fn expired_or_revoked_sessions_are_invalid() {
        assert!(!session(Duration::seconds(-5), false).is_valid_at(Utc::now()));
        assert!(!session(Duration::days(1), true).is_valid_at(Utc::now()));
    }
}

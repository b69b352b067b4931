//! User domain model.
//!
//! Only the fields the award pipeline and housekeeping sweeps touch are
//! modelled here; credentials and profile data live with the web layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An application user as seen by the housekeeping sweeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Cleared by the inactivity sweep when `last_activity` goes stale.
    pub logged_in: bool,
    pub last_activity: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            logged_in: false,
            last_activity: None,
            created_at: Utc::now(),
        }
    }

    /// True if the user is flagged logged-in but has been idle since `cutoff`.
    pub fn is_idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.logged_in && self.last_activity.is_some_and(|at| at < cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn idle_check_requires_logged_in_and_stale_activity() {
        let cutoff = Utc::now();
        let mut user = User::new("alice");
        user.logged_in = true;
        user.last_activity = Some(cutoff - Duration::minutes(1));
        assert!(user.is_idle_since(cutoff));

        user.last_activity = Some(cutoff + Duration::minutes(1));
        assert!(!user.is_idle_since(cutoff));

        user.logged_in = false;
        user.last_activity = Some(cutoff - Duration::minutes(1));
        assert!(!user.is_idle_since(cutoff));

        user.logged_in = true;
        user.last_activity = None;
        assert!(!user.is_idle_since(cutoff));
    }
}

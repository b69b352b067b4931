//! Workout log and workout plan models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-submitted workout data, validated before persisting.
///
/// Kept separate from [`WorkoutLog`] so a rejected submission can be handed
/// back to the caller intact for re-display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDraft {
    pub activity: String,
    pub duration_minutes: i64,
}

/// A persisted workout entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity: String,
    pub duration_minutes: i64,
    pub logged_at: DateTime<Utc>,
}

impl WorkoutLog {
    pub fn from_draft(user_id: Uuid, draft: &WorkoutDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            activity: draft.activity.clone(),
            duration_minutes: draft.duration_minutes,
            logged_at: Utc::now(),
        }
    }
}

/// A user-authored workout plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl WorkoutPlan {
    pub fn new(user_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

//! Goal domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Goal is being worked toward.
    #[default]
    Active,
    /// Goal has been reached.
    Completed,
    /// Goal was given up on.
    Abandoned,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Abandoned => "abandoned",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "abandoned" => Some(Self::Abandoned),
            _ => None,
        }
    }
}

/// Caller-submitted goal fields for an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalUpdate {
    pub name: String,
    pub description: String,
    pub status: GoalStatus,
    pub target_value: f64,
    pub current_value: f64,
}

/// A fitness goal tracked for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub status: GoalStatus,
    pub target_value: f64,
    pub current_value: f64,
    /// Set by the daily archival sweep once a completed goal ages out.
    pub archived: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new active goal for a user.
    pub fn new(user_id: Uuid, name: impl Into<String>, target_value: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            description: String::new(),
            status: GoalStatus::Active,
            target_value,
            current_value: 0.0,
            archived: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the goal completed, stamping the completion time once.
    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.status = GoalStatus::Completed;
        self.current_value = self.target_value;
        if self.completed_at.is_none() {
            self.completed_at = Some(at);
        }
        self.updated_at = at;
    }

    pub fn is_completed(&self) -> bool {
        self.status == GoalStatus::Completed
    }
}

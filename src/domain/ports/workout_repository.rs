//! Workout log and workout plan repository ports.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{WorkoutLog, WorkoutPlan};

/// Repository interface for workout log persistence.
#[async_trait]
pub trait WorkoutLogRepository: Send + Sync {
    /// Persist a workout entry.
    async fn create(&self, log: &WorkoutLog) -> DomainResult<()>;

    /// List a user's workout entries, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<WorkoutLog>>;

    /// Total workouts a user has logged.
    async fn count_for_user(&self, user_id: Uuid) -> DomainResult<u64>;
}

/// Repository interface for workout plan persistence.
#[async_trait]
pub trait WorkoutPlanRepository: Send + Sync {
    /// Persist a workout plan.
    async fn create(&self, plan: &WorkoutPlan) -> DomainResult<()>;

    /// Total plans a user has created.
    async fn count_for_user(&self, user_id: Uuid) -> DomainResult<u64>;
}

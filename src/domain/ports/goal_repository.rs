//! Goal repository port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::Goal;

/// Repository interface for Goal persistence.
///
/// The count methods back the award evaluator's counters; the scan methods
/// back the housekeeping sweeps. Counters are computed fresh on every call,
/// never cached.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Create a new goal.
    async fn create(&self, goal: &Goal) -> DomainResult<()>;

    /// Get a goal by id, scoped to its owner.
    async fn get_for_user(&self, id: Uuid, user_id: Uuid) -> DomainResult<Option<Goal>>;

    /// Update an existing goal.
    async fn update(&self, goal: &Goal) -> DomainResult<()>;

    /// Delete a goal by id.
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// List all goals belonging to a user.
    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<Goal>>;

    /// Total number of goals a user has ever set.
    async fn count_for_user(&self, user_id: Uuid) -> DomainResult<u64>;

    /// Number of a user's goals currently in completed status.
    async fn count_completed_for_user(&self, user_id: Uuid) -> DomainResult<u64>;

    /// Goals (any user) completed within `[from, to]`.
    async fn count_completed_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<u64>;

    /// Goals (any user) completed after `cutoff`.
    async fn count_completed_after(&self, cutoff: DateTime<Utc>) -> DomainResult<u64>;

    /// Completed, unarchived goals whose completion predates `cutoff`.
    async fn find_completed_unarchived_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> DomainResult<Vec<Goal>>;

    /// Bulk-flag the given goals as archived; returns rows affected.
    async fn archive(&self, ids: &[Uuid]) -> DomainResult<u64>;
}

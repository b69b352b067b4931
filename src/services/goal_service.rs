//! Goal service: primary goal mutations plus the badge check they trigger.

use std::sync::Arc;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Goal, GoalStatus, GoalUpdate};
use crate::domain::ports::{BadgeStore, GoalRepository};
use crate::services::award_evaluator;
use crate::services::badge_awards::BadgeAwardService;
use crate::services::notification::NotificationSlot;

pub struct GoalService<G: GoalRepository, S: BadgeStore> {
    goals: Arc<G>,
    awards: Arc<BadgeAwardService<S>>,
}

impl<G: GoalRepository, S: BadgeStore> GoalService<G, S> {
    pub fn new(goals: Arc<G>, awards: Arc<BadgeAwardService<S>>) -> Self {
        Self { goals, awards }
    }

    /// Create a goal, then run the badge check (a brand-new first goal can
    /// earn "Goal Setter").
    pub async fn create_goal(
        &self,
        user_id: Uuid,
        name: &str,
        description: &str,
        target_value: f64,
        slot: &NotificationSlot,
    ) -> DomainResult<Goal> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationFailed("goal name cannot be empty".to_string()));
        }

        let goal = Goal::new(user_id, name, target_value).with_description(description);
        self.goals.create(&goal).await?;
        info!(%user_id, goal = %goal.name, "goal created");

        self.check_goal_badges(user_id, slot).await;
        Ok(goal)
    }

    /// Mark a goal completed. The completion is persisted before the badge
    /// check runs; a down badge store cannot fail this operation.
    pub async fn complete_goal(
        &self,
        goal_id: Uuid,
        user_id: Uuid,
        slot: &NotificationSlot,
    ) -> DomainResult<Goal> {
        let mut goal = self
            .goals
            .get_for_user(goal_id, user_id)
            .await?
            .ok_or(DomainError::GoalNotFound(goal_id))?;

        goal.complete(Utc::now());
        self.goals.update(&goal).await?;
        info!(%user_id, goal = %goal.name, "goal completed");

        self.check_goal_badges(user_id, slot).await;
        Ok(goal)
    }

    /// Update mutable goal fields. A transition into completed status stamps
    /// the completion time and triggers the badge check; leaving completed
    /// status clears it.
    pub async fn update_goal(
        &self,
        goal_id: Uuid,
        user_id: Uuid,
        update: GoalUpdate,
        slot: &NotificationSlot,
    ) -> DomainResult<Goal> {
        let mut goal = self
            .goals
            .get_for_user(goal_id, user_id)
            .await?
            .ok_or(DomainError::GoalNotFound(goal_id))?;

        let was_just_completed = !goal.is_completed() && update.status == GoalStatus::Completed;

        goal.name = update.name;
        goal.description = update.description;
        goal.status = update.status;
        goal.target_value = update.target_value;
        goal.current_value = update.current_value;
        if goal.status == GoalStatus::Completed {
            if goal.completed_at.is_none() {
                goal.completed_at = Some(Utc::now());
            }
        } else {
            goal.completed_at = None;
        }
        goal.updated_at = Utc::now();

        self.goals.update(&goal).await?;
        info!(%user_id, goal = %goal.name, "goal updated");

        if was_just_completed {
            self.check_goal_badges(user_id, slot).await;
        }
        Ok(goal)
    }

    pub async fn delete_goal(&self, goal_id: Uuid, user_id: Uuid) -> DomainResult<()> {
        let goal = self
            .goals
            .get_for_user(goal_id, user_id)
            .await?
            .ok_or(DomainError::GoalNotFound(goal_id))?;
        self.goals.delete(goal.id).await?;
        info!(%user_id, %goal_id, "goal deleted");
        Ok(())
    }

    pub async fn list_goals(&self, user_id: Uuid) -> DomainResult<Vec<Goal>> {
        self.goals.list_for_user(user_id).await
    }

    /// Best-effort badge check: recompute both goal counters, evaluate, and
    /// hand a fresh award to the notification slot. Counter reads failing is
    /// the one case that degrades silently here too; the primary mutation has
    /// already committed.
    async fn check_goal_badges(&self, user_id: Uuid, slot: &NotificationSlot) {
        let (total, completed) = match self.goal_counters(user_id).await {
            Ok(counters) => counters,
            Err(err) => {
                tracing::warn!(%user_id, error = %err, "could not compute goal counters");
                return;
            }
        };

        if let Some(spec) = award_evaluator::evaluate_goal_progress(total, completed) {
            if let Some(badge) = self.awards.award_if_absent(user_id, &spec).await.into_badge() {
                slot.set(badge);
            }
        }
    }

    async fn goal_counters(&self, user_id: Uuid) -> DomainResult<(u64, u64)> {
        let total = self.goals.count_for_user(user_id).await?;
        let completed = self.goals.count_completed_for_user(user_id).await?;
        Ok((total, completed))
    }
}

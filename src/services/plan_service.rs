//! Workout plan service: plan creation plus the badge check it triggers.

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::WorkoutPlan;
use crate::domain::ports::{BadgeStore, WorkoutPlanRepository};
use crate::services::award_evaluator::{self, CounterKind};
use crate::services::badge_awards::BadgeAwardService;
use crate::services::notification::NotificationSlot;

pub struct PlanService<P: WorkoutPlanRepository, S: BadgeStore> {
    plans: Arc<P>,
    awards: Arc<BadgeAwardService<S>>,
}

impl<P: WorkoutPlanRepository, S: BadgeStore> PlanService<P, S> {
    pub fn new(plans: Arc<P>, awards: Arc<BadgeAwardService<S>>) -> Self {
        Self { plans, awards }
    }

    /// Persist a workout plan, then run the badge check (the first plan ever
    /// created earns "Plan Creator").
    pub async fn create_plan(
        &self,
        user_id: Uuid,
        name: &str,
        slot: &NotificationSlot,
    ) -> DomainResult<WorkoutPlan> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationFailed("plan name cannot be empty".to_string()));
        }

        let plan = WorkoutPlan::new(user_id, name);
        self.plans.create(&plan).await?;
        info!(%user_id, plan = %plan.name, "workout plan created");

        self.check_plan_badges(user_id, slot).await;
        Ok(plan)
    }

    async fn check_plan_badges(&self, user_id: Uuid, slot: &NotificationSlot) {
        let count = match self.plans.count_for_user(user_id).await {
            Ok(count) => count,
            Err(err) => {
                warn!(%user_id, error = %err, "could not compute plan counter");
                return;
            }
        };

        if let Some(spec) = award_evaluator::evaluate(CounterKind::PlansCreated, count) {
            if let Some(badge) = self.awards.award_if_absent(user_id, &spec).await.into_badge() {
                slot.set(badge);
            }
        }
    }
}

//! Workout service: workout logging plus the badge check it triggers.

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{WorkoutDraft, WorkoutLog};
use crate::domain::ports::{BadgeStore, WorkoutLogRepository};
use crate::services::award_evaluator::{self, CounterKind};
use crate::services::badge_awards::BadgeAwardService;
use crate::services::notification::NotificationSlot;

pub struct WorkoutService<W: WorkoutLogRepository, S: BadgeStore> {
    workouts: Arc<W>,
    awards: Arc<BadgeAwardService<S>>,
}

impl<W: WorkoutLogRepository, S: BadgeStore> WorkoutService<W, S> {
    pub fn new(workouts: Arc<W>, awards: Arc<BadgeAwardService<S>>) -> Self {
        Self { workouts, awards }
    }

    /// Validate and persist a workout entry, then run the badge check.
    ///
    /// A rejected draft is handed back inside the error so the caller can
    /// re-display it.
    pub async fn log_workout(
        &self,
        user_id: Uuid,
        draft: WorkoutDraft,
        slot: &NotificationSlot,
    ) -> DomainResult<WorkoutLog> {
        if draft.duration_minutes <= 0 {
            return Err(DomainError::InvalidWorkout {
                reason: "duration must be positive".to_string(),
                draft,
            });
        }
        if draft.activity.trim().is_empty() {
            return Err(DomainError::InvalidWorkout {
                reason: "activity cannot be empty".to_string(),
                draft,
            });
        }

        let log = WorkoutLog::from_draft(user_id, &draft);
        self.workouts.create(&log).await?;
        info!(%user_id, activity = %log.activity, "workout logged");

        self.check_workout_badges(user_id, slot).await;
        Ok(log)
    }

    pub async fn list_workouts(&self, user_id: Uuid) -> DomainResult<Vec<WorkoutLog>> {
        self.workouts.list_for_user(user_id).await
    }

    async fn check_workout_badges(&self, user_id: Uuid, slot: &NotificationSlot) {
        let count = match self.workouts.count_for_user(user_id).await {
            Ok(count) => count,
            Err(err) => {
                warn!(%user_id, error = %err, "could not compute workout counter");
                return;
            }
        };

        if let Some(spec) = award_evaluator::evaluate(CounterKind::WorkoutsLogged, count) {
            if let Some(badge) = self.awards.award_if_absent(user_id, &spec).await.into_badge() {
                slot.set(badge);
            }
        }
    }
}

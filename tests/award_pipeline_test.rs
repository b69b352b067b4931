//! End-to-end tests of the award pipeline: trigger services, evaluator,
//! idempotency boundary, and notification slot working against real SQLite
//! repositories and a mock badge store.

mod common;

use std::sync::Arc;

use common::{seed_user, setup_pool, MockBadgeStore};
use fittrack::adapters::sqlite::{
    SqliteGoalRepository, SqliteWorkoutLogRepository, SqliteWorkoutPlanRepository,
};
use fittrack::domain::errors::DomainError;
use fittrack::domain::models::{BadgeSpec, GoalStatus, GoalUpdate, WorkoutDraft};
use fittrack::domain::ports::GoalRepository;
use fittrack::services::{
    AwardOutcome, BadgeAwardService, GoalService, NotificationSlot, PlanService, WorkoutService,
};
use uuid::Uuid;

const TEST_SPEC: BadgeSpec = BadgeSpec {
    name: "Goal Master",
    icon_url: "/images/GoalMaster.png",
};

#[tokio::test]
async fn sequential_awards_are_idempotent() {
    let store = Arc::new(MockBadgeStore::new());
    let awards = BadgeAwardService::new(store.clone());
    let user_id = Uuid::new_v4();

    let first = awards.award_if_absent(user_id, &TEST_SPEC).await;
    let badge = first.into_badge().expect("first call awards");
    assert_eq!(badge.name, "Goal Master");

    let second = awards.award_if_absent(user_id, &TEST_SPEC).await;
    assert_eq!(second, AwardOutcome::AlreadyHeld);

    // Exactly one award call reached the store across both attempts.
    assert_eq!(store.award_call_count(), 1);
    assert_eq!(store.stored_badges().len(), 1);
}

#[tokio::test]
async fn same_badge_name_for_another_user_still_awards() {
    let store = Arc::new(MockBadgeStore::new());
    let awards = BadgeAwardService::new(store.clone());

    awards.award_if_absent(Uuid::new_v4(), &TEST_SPEC).await;
    let other = awards.award_if_absent(Uuid::new_v4(), &TEST_SPEC).await;
    assert!(matches!(other, AwardOutcome::Awarded(_)));
    assert_eq!(store.stored_badges().len(), 2);
}

#[tokio::test]
async fn award_failure_degrades_without_error() {
    let store = Arc::new(MockBadgeStore::new());
    store.fail_award(true);
    let awards = BadgeAwardService::new(store.clone());

    let outcome = awards.award_if_absent(Uuid::new_v4(), &TEST_SPEC).await;
    assert_eq!(outcome, AwardOutcome::Degraded);
    assert!(store.stored_badges().is_empty());
}

#[tokio::test]
async fn list_failure_does_not_suppress_the_award() {
    let store = Arc::new(MockBadgeStore::new());
    store.fail_list(true);
    let awards = BadgeAwardService::new(store.clone());

    // A flaky existence check reads as "not held"; the award still goes out.
    let outcome = awards.award_if_absent(Uuid::new_v4(), &TEST_SPEC).await;
    assert!(matches!(outcome, AwardOutcome::Awarded(_)));
}

#[tokio::test]
async fn revoke_tolerates_missing_badges() {
    let store = Arc::new(MockBadgeStore::new());
    let awards = BadgeAwardService::new(store);
    // Unknown id: the store errors, the revoker swallows it.
    awards.revoke(Uuid::new_v4()).await;
}

#[tokio::test]
async fn completing_a_goal_survives_a_dead_badge_service() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "alice").await;
    let goals = Arc::new(SqliteGoalRepository::new(pool));
    let store = Arc::new(MockBadgeStore::new());
    store.fail_everything();
    let service = GoalService::new(goals.clone(), Arc::new(BadgeAwardService::new(store)));
    let slot = NotificationSlot::new();

    let goal = service
        .create_goal(user.id, "Run 5k", "", 5.0, &slot)
        .await
        .expect("create succeeds with store down");
    slot.take();

    let completed = service
        .complete_goal(goal.id, user.id, &slot)
        .await
        .expect("complete succeeds with store down");

    assert_eq!(completed.status, GoalStatus::Completed);
    assert!(completed.completed_at.is_some());
    assert!(slot.take().is_none(), "no badge surfaced while degraded");

    // The completion was persisted despite the degraded badge path.
    let persisted = goals.get_for_user(goal.id, user.id).await.unwrap().unwrap();
    assert_eq!(persisted.status, GoalStatus::Completed);
}

#[tokio::test]
async fn first_goal_earns_goal_setter_not_first_completed() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "bob").await;
    let goals = Arc::new(SqliteGoalRepository::new(pool));
    let store = Arc::new(MockBadgeStore::new());
    let service = GoalService::new(goals, Arc::new(BadgeAwardService::new(store)));
    let slot = NotificationSlot::new();

    let goal = service
        .create_goal(user.id, "Stretch daily", "", 30.0, &slot)
        .await
        .unwrap();
    assert_eq!(slot.take().unwrap().name, "Goal Setter");

    // Completing that same single goal: total=1 still wins priority, and the
    // setter badge is already held, so nothing new surfaces.
    service.complete_goal(goal.id, user.id, &slot).await.unwrap();
    assert!(slot.take().is_none());
}

#[tokio::test]
async fn tenth_completed_goal_awards_goal_champion_once() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "carol").await;
    let goals = Arc::new(SqliteGoalRepository::new(pool));
    let store = Arc::new(MockBadgeStore::new());
    let service = GoalService::new(goals, Arc::new(BadgeAwardService::new(store.clone())));
    let slot = NotificationSlot::new();

    let mut created = Vec::new();
    for i in 0..11 {
        let goal = service
            .create_goal(user.id, &format!("goal {i}"), "", 1.0, &slot)
            .await
            .unwrap();
        created.push(goal);
        slot.take();
    }

    for goal in created.iter().take(9) {
        service.complete_goal(goal.id, user.id, &slot).await.unwrap();
        slot.take();
    }

    // Tenth completion: evaluator hits the 10 threshold.
    service.complete_goal(created[9].id, user.id, &slot).await.unwrap();
    let badge = slot.take().expect("badge surfaced to the response step");
    assert_eq!(badge.name, "Goal Champion");
    assert!(slot.take().is_none(), "slot reads at most once");

    // Eleventh completion: counter 11 has no table entry, nothing fires.
    service.complete_goal(created[10].id, user.id, &slot).await.unwrap();
    assert!(slot.take().is_none());
    assert_eq!(
        store
            .stored_badges()
            .iter()
            .filter(|b| b.name == "Goal Champion")
            .count(),
        1
    );
}

#[tokio::test]
async fn update_into_completed_status_triggers_the_badge_check() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "dave").await;
    let goals = Arc::new(SqliteGoalRepository::new(pool));
    let store = Arc::new(MockBadgeStore::new());
    let service = GoalService::new(goals, Arc::new(BadgeAwardService::new(store.clone())));
    let slot = NotificationSlot::new();

    // Two goals so the Goal Setter special case stays out of the way.
    let first = service.create_goal(user.id, "one", "", 1.0, &slot).await.unwrap();
    slot.take();
    service.create_goal(user.id, "two", "", 1.0, &slot).await.unwrap();
    slot.take();

    let completed_update = GoalUpdate {
        name: "one".to_string(),
        description: String::new(),
        status: GoalStatus::Completed,
        target_value: 1.0,
        current_value: 1.0,
    };
    let updated = service
        .update_goal(first.id, user.id, completed_update.clone(), &slot)
        .await
        .unwrap();
    assert!(updated.completed_at.is_some());
    assert_eq!(slot.take().unwrap().name, "First Goal Completed");

    // Re-saving an already-completed goal is not a fresh completion.
    service
        .update_goal(first.id, user.id, completed_update, &slot)
        .await
        .unwrap();
    assert!(slot.take().is_none());
}

#[tokio::test]
async fn first_workout_awards_and_invalid_draft_comes_back() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "erin").await;
    let workouts = Arc::new(SqliteWorkoutLogRepository::new(pool));
    let store = Arc::new(MockBadgeStore::new());
    let service = WorkoutService::new(workouts, Arc::new(BadgeAwardService::new(store.clone())));
    let slot = NotificationSlot::new();

    let err = service
        .log_workout(
            user.id,
            WorkoutDraft { activity: "run".to_string(), duration_minutes: 0 },
            &slot,
        )
        .await
        .unwrap_err();
    match err {
        DomainError::InvalidWorkout { draft, .. } => {
            assert_eq!(draft.activity, "run");
            assert_eq!(draft.duration_minutes, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
    // Validation failed before any store traffic.
    assert_eq!(store.award_call_count(), 0);

    service
        .log_workout(
            user.id,
            WorkoutDraft { activity: "run".to_string(), duration_minutes: 30 },
            &slot,
        )
        .await
        .unwrap();
    assert_eq!(slot.take().unwrap().name, "First Workout");
}

#[tokio::test]
async fn first_plan_awards_plan_creator() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "frank").await;
    let plans = Arc::new(SqliteWorkoutPlanRepository::new(pool));
    let store = Arc::new(MockBadgeStore::new());
    let service = PlanService::new(plans, Arc::new(BadgeAwardService::new(store)));
    let slot = NotificationSlot::new();

    service.create_plan(user.id, "push/pull/legs", &slot).await.unwrap();
    assert_eq!(slot.take().unwrap().name, "Plan Creator");

    // Second plan: counter 2 has no entry.
    service.create_plan(user.id, "5x5", &slot).await.unwrap();
    assert!(slot.take().is_none());
}

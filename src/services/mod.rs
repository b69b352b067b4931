pub mod award_evaluator;
pub mod badge_awards;
pub mod goal_service;
pub mod housekeeping;
pub mod notification;
pub mod plan_service;
pub mod workout_service;

pub use award_evaluator::CounterKind;
pub use badge_awards::{AwardOutcome, BadgeAwardService};
pub use goal_service::GoalService;
pub use housekeeping::{HousekeepingScheduler, HousekeepingService, Job, SchedulerHandle};
pub use notification::NotificationSlot;
pub use plan_service::PlanService;
pub use workout_service::WorkoutService;

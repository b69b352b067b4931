pub mod badge_store;
pub mod goal_repository;
pub mod user_repository;
pub mod workout_repository;

pub use badge_store::BadgeStore;
pub use goal_repository::GoalRepository;
pub use user_repository::UserRepository;
pub use workout_repository::{WorkoutLogRepository, WorkoutPlanRepository};

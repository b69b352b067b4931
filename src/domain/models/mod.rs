pub mod badge;
pub mod config;
pub mod goal;
pub mod user;
pub mod workout;

pub use badge::{Badge, BadgeSpec};
pub use config::{BadgeServiceConfig, Config, DatabaseConfig, HousekeepingConfig, LoggingConfig};
pub use goal::{Goal, GoalStatus, GoalUpdate};
pub use user::User;
pub use workout::{WorkoutDraft, WorkoutLog, WorkoutPlan};

//! FitTrack - achievement award pipeline and housekeeping scheduler.
//!
//! This crate covers the one subsystem of the FitTrack fitness tracker with
//! real consistency and scheduling concerns: turning domain counters (goals
//! completed, workouts logged, plans created) into best-effort badge awards
//! against an independently deployed badge service, handing a fresh award to
//! the response step of the same request, and running four periodic
//! maintenance sweeps over goals and users.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, repository/store ports, errors
//! - **Service Layer** (`services`): award evaluation, the idempotency
//!   boundary, trigger services, housekeeping
//! - **Adapters** (`adapters`): SQLite repositories, badge service HTTP client
//! - **Infrastructure** (`infrastructure`): configuration and logging
//!
//! Badge awarding is a side channel, never a hard dependency: any failure
//! talking to the badge service is logged and degraded to "no badge awarded";
//! the primary mutation that triggered the check always stands.

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Badge, BadgeServiceConfig, BadgeSpec, Config, DatabaseConfig, Goal, GoalStatus, GoalUpdate,
    HousekeepingConfig, LoggingConfig, User, WorkoutDraft, WorkoutLog, WorkoutPlan,
};
pub use domain::ports::{
    BadgeStore, GoalRepository, UserRepository, WorkoutLogRepository, WorkoutPlanRepository,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    AwardOutcome, BadgeAwardService, CounterKind, GoalService, HousekeepingScheduler,
    HousekeepingService, Job, NotificationSlot, PlanService, SchedulerHandle, WorkoutService,
};

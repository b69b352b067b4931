//! Domain errors for the FitTrack award pipeline.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::WorkoutDraft;

/// Domain-level errors surfaced by the trigger services and repositories.
///
/// Badge-path failures are deliberately absent: the award boundary degrades
/// every remote failure into "no badge" and never raises through here.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Goal not found: {0}")]
    GoalNotFound(Uuid),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid workout ({reason}): {draft:?}")]
    InvalidWorkout { reason: String, draft: WorkoutDraft },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

//! SQLite implementations of the workout log and workout plan repositories.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{parse_datetime, parse_uuid};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{WorkoutLog, WorkoutPlan};
use crate::domain::ports::{WorkoutLogRepository, WorkoutPlanRepository};

#[derive(Clone)]
pub struct SqliteWorkoutLogRepository {
    pool: SqlitePool,
}

impl SqliteWorkoutLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkoutLogRepository for SqliteWorkoutLogRepository {
    async fn create(&self, log: &WorkoutLog) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO workout_logs (id, user_id, activity, duration_minutes, logged_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(log.id.to_string())
        .bind(log.user_id.to_string())
        .bind(&log.activity)
        .bind(log.duration_minutes)
        .bind(log.logged_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<WorkoutLog>> {
        let rows: Vec<WorkoutLogRow> = sqlx::query_as(
            "SELECT id, user_id, activity, duration_minutes, logged_at
             FROM workout_logs WHERE user_id = ? ORDER BY logged_at DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn count_for_user(&self, user_id: Uuid) -> DomainResult<u64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM workout_logs WHERE user_id = ?")
                .bind(user_id.to_string())
                .fetch_one(&self.pool)
                .await?;

        Ok(count.max(0) as u64)
    }
}

#[derive(sqlx::FromRow)]
struct WorkoutLogRow {
    id: String,
    user_id: String,
    activity: String,
    duration_minutes: i64,
    logged_at: String,
}

impl TryFrom<WorkoutLogRow> for WorkoutLog {
    type Error = DomainError;

    fn try_from(row: WorkoutLogRow) -> Result<Self, Self::Error> {
        Ok(WorkoutLog {
            id: parse_uuid(&row.id)?,
            user_id: parse_uuid(&row.user_id)?,
            activity: row.activity,
            duration_minutes: row.duration_minutes,
            logged_at: parse_datetime(&row.logged_at)?,
        })
    }
}

#[derive(Clone)]
pub struct SqliteWorkoutPlanRepository {
    pool: SqlitePool,
}

impl SqliteWorkoutPlanRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkoutPlanRepository for SqliteWorkoutPlanRepository {
    async fn create(&self, plan: &WorkoutPlan) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO workout_plans (id, user_id, name, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(plan.id.to_string())
        .bind(plan.user_id.to_string())
        .bind(&plan.name)
        .bind(plan.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn count_for_user(&self, user_id: Uuid) -> DomainResult<u64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM workout_plans WHERE user_id = ?")
                .bind(user_id.to_string())
                .fetch_one(&self.pool)
                .await?;

        Ok(count.max(0) as u64)
    }
}

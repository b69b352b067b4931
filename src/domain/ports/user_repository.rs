//! User repository port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::User;

/// Repository interface for User persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user.
    async fn create(&self, user: &User) -> DomainResult<()>;

    /// Get a user by id.
    async fn get(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Find a user by username.
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    /// Update an existing user.
    async fn update(&self, user: &User) -> DomainResult<()>;

    /// All users currently flagged logged-in.
    async fn find_logged_in(&self) -> DomainResult<Vec<User>>;

    /// Stamp a user's last-activity time (called on every handled request).
    async fn record_activity(&self, id: Uuid, at: DateTime<Utc>) -> DomainResult<()>;
}

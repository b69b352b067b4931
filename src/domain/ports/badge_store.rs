//! Badge store port.
//!
//! The badge store is an independently deployed, independently failing
//! service. Implementations are expected to time out quickly; callers at the
//! award boundary treat every error as "no badge" and carry on.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::Badge;

/// Remote badge store RPC contract.
#[async_trait]
pub trait BadgeStore: Send + Sync {
    /// Create a badge for a user. The store performs no dedup of its own.
    async fn award(&self, user_id: Uuid, name: &str, icon_url: &str) -> Result<Badge>;

    /// List every badge owned by a user, order not significant.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Badge>>;

    /// Delete a badge by id. The store reports "not found" as an error;
    /// best-effort revokers tolerate it.
    async fn delete(&self, badge_id: Uuid) -> Result<()>;
}

//! Badge award service: the idempotency and failure-isolation boundary.
//!
//! Awarding a badge is a best-effort side channel. The primary mutation that
//! triggered it has already committed by the time this service runs, so every
//! remote failure here is logged and degraded to "no badge awarded" instead
//! of propagating.

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::models::{Badge, BadgeSpec};
use crate::domain::ports::BadgeStore;

/// Outcome of an award attempt. Deliberately not a `Result`: degraded remote
/// calls are an expected steady state, not an error for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AwardOutcome {
    /// A new badge was created in the store.
    Awarded(Badge),
    /// The user already holds a badge with this name; no award call was made.
    AlreadyHeld,
    /// The store could not be reached or rejected the call; nothing awarded.
    Degraded,
}

impl AwardOutcome {
    /// The freshly awarded badge, if any.
    pub fn into_badge(self) -> Option<Badge> {
        match self {
            Self::Awarded(badge) => Some(badge),
            Self::AlreadyHeld | Self::Degraded => None,
        }
    }
}

/// Check-then-act award client over the remote badge store.
pub struct BadgeAwardService<S: BadgeStore> {
    store: Arc<S>,
}

impl<S: BadgeStore> BadgeAwardService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Award `spec` to `user_id` unless a badge with the same name already
    /// exists.
    ///
    /// The existence check and the award are two remote calls with no
    /// atomicity between them; two concurrent triggers for the same user and
    /// name can both pass the check and double-award. Sequential calls are
    /// idempotent. A failed existence check is treated as "not held" so a
    /// flaky list endpoint cannot suppress awards outright.
    pub async fn award_if_absent(&self, user_id: Uuid, spec: &BadgeSpec) -> AwardOutcome {
        if self.user_has_badge(user_id, spec.name).await {
            return AwardOutcome::AlreadyHeld;
        }

        match self.store.award(user_id, spec.name, spec.icon_url).await {
            Ok(badge) => {
                info!(%user_id, badge = spec.name, "awarded badge");
                AwardOutcome::Awarded(badge)
            }
            Err(err) => {
                warn!(%user_id, badge = spec.name, error = %err, "could not award badge");
                AwardOutcome::Degraded
            }
        }
    }

    /// Delete a badge by id, best effort. "Not found" and transport errors
    /// alike are logged and swallowed.
    pub async fn revoke(&self, badge_id: Uuid) {
        match self.store.delete(badge_id).await {
            Ok(()) => info!(%badge_id, "revoked badge"),
            Err(err) => warn!(%badge_id, error = %err, "could not revoke badge"),
        }
    }

    /// List a user's badges for display. Degrades to an empty list.
    pub async fn badges_for_user(&self, user_id: Uuid) -> Vec<Badge> {
        match self.store.list_for_user(user_id).await {
            Ok(badges) => badges,
            Err(err) => {
                warn!(%user_id, error = %err, "could not list badges");
                Vec::new()
            }
        }
    }

    async fn user_has_badge(&self, user_id: Uuid, badge_name: &str) -> bool {
        match self.store.list_for_user(user_id).await {
            Ok(badges) => badges.iter().any(|b| b.name == badge_name),
            Err(err) => {
                warn!(%user_id, error = %err, "could not check existing badges");
                false
            }
        }
    }
}

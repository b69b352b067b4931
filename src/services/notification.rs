//! Single-slot handoff for a just-awarded badge.
//!
//! Carries "a badge was just awarded" from the trigger service to the later
//! response-rendering step of the same call chain. The slot is an explicit
//! per-request object rather than ambient thread-scoped state: it is created
//! with the request and dropped with it, so a pooled worker can never leak a
//! pending badge into an unrelated call.

use std::sync::Mutex;
use tracing::debug;

use crate::domain::models::Badge;

/// Call-scoped, at-most-once badge notification slot.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    pending: Mutex<Option<Badge>>,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a badge for the response step. Last writer wins within the
    /// chain; in practice at most one set happens per request.
    pub fn set(&self, badge: Badge) {
        debug!(badge = %badge.name, "badge pending for display");
        let mut pending = self.pending.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *pending = Some(badge);
    }

    /// Destructive read: the first caller gets the badge, every later caller
    /// in the same chain gets `None`.
    pub fn take(&self) -> Option<Badge> {
        let mut pending = self.pending.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn badge(name: &str) -> Badge {
        Badge {
            id: Uuid::new_v4(),
            name: name.to_string(),
            icon_url: format!("/images/{}.png", name.replace(' ', "")),
            user_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn take_is_destructive() {
        let slot = NotificationSlot::new();
        slot.set(badge("Goal Master"));
        assert_eq!(slot.take().unwrap().name, "Goal Master");
        assert!(slot.take().is_none());
    }

    #[test]
    fn empty_slot_yields_none() {
        let slot = NotificationSlot::new();
        assert!(slot.take().is_none());
    }

    #[test]
    fn last_writer_wins_within_a_chain() {
        let slot = NotificationSlot::new();
        slot.set(badge("First Workout"));
        slot.set(badge("Workout Beginner"));
        assert_eq!(slot.take().unwrap().name, "Workout Beginner");
        assert!(slot.take().is_none());
    }
}

//! Badge domain model.
//!
//! Badges are owned by the remote badge service; the main application only
//! holds them for the duration of a single request (to display a fresh award
//! or render a profile page). They are never cached or persisted locally.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named achievement record owned by a user.
///
/// Field names follow the badge service wire format (camelCase JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Store-assigned identifier, opaque to this application.
    pub id: Uuid,
    pub name: String,
    pub icon_url: String,
    pub user_id: Uuid,
}

/// A static badge descriptor from a threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeSpec {
    pub name: &'static str,
    pub icon_url: &'static str,
}

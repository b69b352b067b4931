//! Wire types for the badge service REST API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for `POST /badges`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeAwardRequest {
    pub name: String,
    pub icon_url: String,
    pub user_id: Uuid,
}

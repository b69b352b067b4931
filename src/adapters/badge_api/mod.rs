//! HTTP adapter for the remote badge store.

pub mod client;
pub mod error;
pub mod types;

pub use client::{BadgeApiConfig, HttpBadgeStore};
pub use error::BadgeApiError;
pub use types::BadgeAwardRequest;

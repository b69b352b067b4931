//! Infrastructure adapters: SQLite persistence and the badge service HTTP
//! client.

pub mod badge_api;
pub mod sqlite;

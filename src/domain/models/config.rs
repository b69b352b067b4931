//! Application configuration model.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure for FitTrack.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Badge service client configuration
    #[serde(default)]
    pub badge_service: BadgeServiceConfig,

    /// Housekeeping job cadences and windows
    #[serde(default)]
    pub housekeeping: HousekeepingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// `SQLite` database URL
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite:.fittrack/fittrack.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

/// Badge service client configuration.
///
/// The timeout is deliberately short: a down badge store only costs the
/// caller "no badge", so there is no reason to stall request handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BadgeServiceConfig {
    /// Base URL of the badge microservice
    #[serde(default = "default_badge_service_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_badge_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_badge_service_url() -> String {
    "http://localhost:8081".to_string()
}

const fn default_badge_timeout_secs() -> u64 {
    5
}

impl BadgeServiceConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for BadgeServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_badge_service_url(),
            timeout_secs: default_badge_timeout_secs(),
        }
    }
}

/// Housekeeping job cadences and scan windows.
///
/// Cadences are configuration, not protocol: defaults reproduce the deployed
/// schedule (weekly, 30 min, daily, 10 min).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HousekeepingConfig {
    /// Seconds between weekly summary runs
    #[serde(default = "default_weekly_summary_interval_secs")]
    pub weekly_summary_interval_secs: u64,

    /// Seconds between inactivity sweeps
    #[serde(default = "default_inactivity_sweep_interval_secs")]
    pub inactivity_sweep_interval_secs: u64,

    /// Seconds between goal archival runs
    #[serde(default = "default_goal_archival_interval_secs")]
    pub goal_archival_interval_secs: u64,

    /// Seconds between recent-completion reports
    #[serde(default = "default_completion_report_interval_secs")]
    pub completion_report_interval_secs: u64,

    /// Minutes of idleness before a logged-in user is swept
    #[serde(default = "default_inactivity_window_mins")]
    pub inactivity_window_mins: i64,

    /// Days a completed goal stays unarchived
    #[serde(default = "default_archive_after_days")]
    pub archive_after_days: i64,

    /// Days covered by the weekly summary window
    #[serde(default = "default_summary_window_days")]
    pub summary_window_days: i64,

    /// Minutes covered by the recent-completion report window
    #[serde(default = "default_report_window_mins")]
    pub report_window_mins: i64,
}

const fn default_weekly_summary_interval_secs() -> u64 {
    7 * 24 * 60 * 60
}

const fn default_inactivity_sweep_interval_secs() -> u64 {
    30 * 60
}

const fn default_goal_archival_interval_secs() -> u64 {
    24 * 60 * 60
}

const fn default_completion_report_interval_secs() -> u64 {
    10 * 60
}

const fn default_inactivity_window_mins() -> i64 {
    30
}

const fn default_archive_after_days() -> i64 {
    30
}

const fn default_summary_window_days() -> i64 {
    7
}

const fn default_report_window_mins() -> i64 {
    10
}

impl Default for HousekeepingConfig {
    fn default() -> Self {
        Self {
            weekly_summary_interval_secs: default_weekly_summary_interval_secs(),
            inactivity_sweep_interval_secs: default_inactivity_sweep_interval_secs(),
            goal_archival_interval_secs: default_goal_archival_interval_secs(),
            completion_report_interval_secs: default_completion_report_interval_secs(),
            inactivity_window_mins: default_inactivity_window_mins(),
            archive_after_days: default_archive_after_days(),
            summary_window_days: default_summary_window_days(),
            report_window_mins: default_report_window_mins(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Optional directory for daily-rolled log files
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}

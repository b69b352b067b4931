use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Database URL cannot be empty")]
    EmptyDatabaseUrl,

    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),

    #[error("Badge service base URL cannot be empty")]
    EmptyBadgeServiceUrl,

    #[error("Invalid badge service timeout: {0}. Must be at least 1 second")]
    InvalidBadgeTimeout(u64),

    #[error("Invalid housekeeping interval for {job}: must be at least 1 second")]
    InvalidHousekeepingInterval { job: &'static str },

    #[error("Invalid housekeeping window for {job}: must be positive")]
    InvalidHousekeepingWindow { job: &'static str },
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults
    /// 2. .fittrack/config.yaml
    /// 3. .fittrack/local.yaml (optional local overrides)
    /// 4. Environment variables (`FITTRACK_` prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".fittrack/config.yaml"))
            .merge(Yaml::file(".fittrack/local.yaml"))
            .merge(Env::prefixed("FITTRACK_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.database.url.is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }

        if config.database.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(
                config.database.max_connections,
            ));
        }

        if config.badge_service.base_url.is_empty() {
            return Err(ConfigError::EmptyBadgeServiceUrl);
        }

        if config.badge_service.timeout_secs == 0 {
            return Err(ConfigError::InvalidBadgeTimeout(
                config.badge_service.timeout_secs,
            ));
        }

        let hk = &config.housekeeping;
        let intervals = [
            ("weekly_summary", hk.weekly_summary_interval_secs),
            ("inactivity_sweep", hk.inactivity_sweep_interval_secs),
            ("goal_archival", hk.goal_archival_interval_secs),
            ("completion_report", hk.completion_report_interval_secs),
        ];
        for (job, secs) in intervals {
            if secs == 0 {
                return Err(ConfigError::InvalidHousekeepingInterval { job });
            }
        }

        let windows = [
            ("inactivity_sweep", hk.inactivity_window_mins),
            ("goal_archival", hk.archive_after_days),
            ("weekly_summary", hk.summary_window_days),
            ("completion_report", hk.report_window_mins),
        ];
        for (job, value) in windows {
            if value <= 0 {
                return Err(ConfigError::InvalidHousekeepingWindow { job });
            }
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = Config::default();
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn empty_badge_service_url_is_rejected() {
        let mut config = Config::default();
        config.badge_service.base_url = String::new();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyBadgeServiceUrl)
        ));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut config = Config::default();
        config.housekeeping.completion_report_interval_secs = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidHousekeepingInterval { job: "completion_report" })
        ));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn negative_window_is_rejected() {
        let mut config = Config::default();
        config.housekeeping.archive_after_days = -1;
        assert!(ConfigLoader::validate(&config).is_err());
    }
}

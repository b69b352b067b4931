//! HTTP client for the badge microservice.
//!
//! The timeout is explicit and short: the award pipeline treats every failure
//! here as "no badge awarded", so a slow or down badge service must cost the
//! request thread a few seconds at most. No retries; the failure path is
//! cheaper than a second round-trip.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::time::Duration;
use uuid::Uuid;

use super::error::BadgeApiError;
use super::types::BadgeAwardRequest;
use crate::domain::models::{Badge, BadgeServiceConfig};
use crate::domain::ports::BadgeStore;

/// Configuration for [`HttpBadgeStore`].
#[derive(Debug, Clone)]
pub struct BadgeApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for BadgeApiConfig {
    fn default() -> Self {
        let service = BadgeServiceConfig::default();
        Self {
            timeout: service.timeout(),
            base_url: service.base_url,
        }
    }
}

impl From<&BadgeServiceConfig> for BadgeApiConfig {
    fn from(config: &BadgeServiceConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
        }
    }
}

/// `reqwest` implementation of the [`BadgeStore`] port.
pub struct HttpBadgeStore {
    http_client: ReqwestClient,
    base_url: String,
}

impl HttpBadgeStore {
    pub fn new(config: BadgeApiConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(BadgeApiError::from)?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &BadgeServiceConfig) -> Result<Self> {
        Self::new(BadgeApiConfig::from(config))
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BadgeApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "failed to read error response".to_string());
        Err(BadgeApiError::from_status(status, body))
    }
}

#[async_trait]
impl BadgeStore for HttpBadgeStore {
    async fn award(&self, user_id: Uuid, name: &str, icon_url: &str) -> Result<Badge> {
        let request = BadgeAwardRequest {
            name: name.to_string(),
            icon_url: icon_url.to_string(),
            user_id,
        };

        let response = self
            .http_client
            .post(format!("{}/badges", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(BadgeApiError::from)?;

        let response = Self::check_status(response).await?;
        let badge: Badge = response.json().await.map_err(BadgeApiError::from)?;
        Ok(badge)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Badge>> {
        let response = self
            .http_client
            .get(format!("{}/badges/user/{user_id}", self.base_url))
            .send()
            .await
            .map_err(BadgeApiError::from)?;

        let response = Self::check_status(response).await?;
        let badges: Vec<Badge> = response.json().await.map_err(BadgeApiError::from)?;
        Ok(badges)
    }

    async fn delete(&self, badge_id: Uuid) -> Result<()> {
        let response = self
            .http_client
            .delete(format!("{}/badges/{badge_id}", self.base_url))
            .send()
            .await
            .map_err(BadgeApiError::from)?;

        Self::check_status(response).await?;
        Ok(())
    }
}

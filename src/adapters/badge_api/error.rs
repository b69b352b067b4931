//! Badge service API error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the badge service HTTP surface.
#[derive(Debug, Error)]
pub enum BadgeApiError {
    #[error("badge service request timed out")]
    Timeout,

    #[error("could not reach badge service: {0}")]
    Transport(String),

    #[error("badge not found")]
    NotFound,

    #[error("badge service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("could not parse badge service response: {0}")]
    Deserialize(String),
}

impl BadgeApiError {
    /// Classify a non-success HTTP response.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        if status == StatusCode::NOT_FOUND {
            Self::NotFound
        } else {
            Self::Api { status: status.as_u16(), body }
        }
    }
}

impl From<reqwest::Error> for BadgeApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Deserialize(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use thiserror::Error;

pub const GENERIC_RETRY_MESSAGE: &str = "Error generating trip. Please try again.";
pub const TIMEOUT_MESSAGE: &str =
    "The trip generator is taking longer than expected. Please try again.";
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Failed to generate trip";
pub const NO_DESTINATIONS_MESSAGE: &str =
    "Unable to generate valid trip suggestions. Please try again.";

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream error: {}", .0.as_deref().unwrap_or("unspecified"))]
    Upstream(Option<String>),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("no valid destinations in response")]
    NoValidDestinations,
    #[error("invalid request: {}", .0.join("; "))]
    InvalidRequest(Vec<String>),
}

impl PlannerError {
    /// Text shown to the user. Upstream errors are passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Timeout => TIMEOUT_MESSAGE.to_string(),
            PlannerError::Transport(_) | PlannerError::MalformedResponse(_) => {
                GENERIC_RETRY_MESSAGE.to_string()
            }
            PlannerError::Upstream(Some(msg)) => msg.clone(),
            PlannerError::Upstream(None) => UPSTREAM_FALLBACK_MESSAGE.to_string(),
            PlannerError::NoValidDestinations => NO_DESTINATIONS_MESSAGE.to_string(),
            PlannerError::InvalidRequest(errors) => {
                format!("Please fix the following errors: {}", errors.join("; "))
            }
        }
    }

    /// Every failure here can be retried except a form the user must fix first.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, PlannerError::InvalidRequest(_))
    }
}

impl From<reqwest::Error> for PlannerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            PlannerError::Timeout
        } else {
            PlannerError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(e: serde_json::Error) -> Self {
        PlannerError::MalformedResponse(e.to_string())
    }
}

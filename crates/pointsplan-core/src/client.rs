// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use crate::config::PlannerConfig;
use crate::envelope::TripResponse;
use crate::error::PlannerError;
use crate::request::TripRequest;
use log::{debug, info, warn};
use pointsplan_itinerary::Destination;
use reqwest::blocking::Client;
use std::time::Duration;

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Blocking client for the trip-generation endpoint.
pub struct TripClient {
    http: Client,
    base_url: String,
    short_timeout: Duration,
    long_timeout: Duration,
}

impl TripClient {
    pub fn new(config: &PlannerConfig) -> Result<Self, PlannerError> {
        // Deadlines are set per request, see `timeout_for`.
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            short_timeout: config.short_timeout(),
            long_timeout: config.long_timeout(),
        })
    }

    pub fn endpoint(&self) -> String {
        join_url(&self.base_url, "generate_trip")
    }

    /// Several free-text preference lines take the generator longer to answer.
    pub fn timeout_for(&self, request: &TripRequest) -> Duration {
        if request.preference_line_count() > 1 {
            self.long_timeout
        } else {
            self.short_timeout
        }
    }

    /// Sends the request and decodes the envelope. A failing HTTP status
    /// still yields the server's own error string when the body carries one.
    pub fn fetch_response(&self, request: &TripRequest) -> Result<TripResponse, PlannerError> {
        request.validate().map_err(PlannerError::InvalidRequest)?;

        let url = self.endpoint();
        let timeout = self.timeout_for(request);
        info!(
            "Requesting trip ideas — url={} timeout_secs={} airports={:?} trip_types={:?}",
            url,
            timeout.as_secs(),
            request.airports,
            request.trip_types
        );

        let response = self.http.post(&url).timeout(timeout).json(request).send()?;
        let status = response.status();
        let body = response.text()?;
        debug!(
            "Trip response received — status={} bytes={}",
            status,
            body.len()
        );

        match TripResponse::from_json(&body) {
            Ok(envelope) if status.is_success() => Ok(envelope),
            Ok(envelope) => {
                warn!("Trip endpoint returned error status — status={}", status);
                Err(PlannerError::Upstream(
                    envelope.error.filter(|e| !e.trim().is_empty()),
                ))
            }
            Err(_) if !status.is_success() => {
                warn!("Trip endpoint returned non-JSON error — status={}", status);
                Err(PlannerError::Upstream(None))
            }
            Err(e) => Err(e),
        }
    }

    /// Full round trip: request, envelope, parse. Never returns an empty list.
    pub fn generate(&self, request: &TripRequest) -> Result<Vec<Destination>, PlannerError> {
        self.fetch_response(request)?.into_destinations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TripClient {
        TripClient::new(&PlannerConfig {
            base_url: "http://localhost:5000/".to_string(),
            short_timeout_secs: 45,
            long_timeout_secs: 90,
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_join() {
        assert_eq!(client().endpoint(), "http://localhost:5000/generate_trip");
        assert_eq!(join_url("http://h", "/points/list"), "http://h/points/list");
    }

    #[test]
    fn test_timeout_tiers() {
        let c = client();
        let mut req = TripRequest::default();
        assert_eq!(c.timeout_for(&req), Duration::from_secs(45));
        req.preferences = "Avoid crowds".into();
        assert_eq!(c.timeout_for(&req), Duration::from_secs(45));
        req.preferences = "Avoid crowds\nAdults only\nSpa on site".into();
        assert_eq!(c.timeout_for(&req), Duration::from_secs(90));
    }

    #[test]
    fn test_invalid_request_not_sent() {
        let err = client().generate(&TripRequest::default()).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidRequest(ref e) if e.len() == 5));
    }
}

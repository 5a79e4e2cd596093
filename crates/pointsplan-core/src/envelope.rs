// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use crate::error::PlannerError;
use log::debug;
use pointsplan_itinerary::{parse_itinerary_report, Destination};
use serde::{Deserialize, Serialize};

/// JSON body returned by `/generate_trip`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripResponse {
    pub success: Option<bool>,
    #[serde(default)]
    pub result: Option<String>,
    /// Older servers used this key for the itinerary text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_plan: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TripResponse {
    pub fn from_json(body: &str) -> Result<Self, PlannerError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The raw itinerary text, or the failure that applies to the whole response.
    pub fn into_itinerary_text(self) -> Result<String, PlannerError> {
        match self.success {
            None => Err(PlannerError::MalformedResponse(
                "missing success flag".to_string(),
            )),
            Some(false) => Err(PlannerError::Upstream(
                self.error.filter(|e| !e.trim().is_empty()),
            )),
            Some(true) => self.result.or(self.travel_plan).ok_or_else(|| {
                PlannerError::MalformedResponse("missing result text".to_string())
            }),
        }
    }

    /// Parses the itinerary. An empty valid subset becomes `NoValidDestinations`.
    pub fn into_destinations(self) -> Result<Vec<Destination>, PlannerError> {
        let text = self.into_itinerary_text()?;
        let report = parse_itinerary_report(&text);
        debug!(
            "Itinerary parsed — destinations={} skipped={}",
            report.destinations.len(),
            report.skipped.len()
        );
        if report.is_empty() {
            return Err(PlannerError::NoValidDestinations);
        }
        Ok(report.destinations)
    }
}

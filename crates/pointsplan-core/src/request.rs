// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use serde::{Deserialize, Serialize};

/// How many trip types a user may pick at once.
pub const MAX_TRIP_TYPES: usize = 2;

/// Body posted to `/generate_trip`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripRequest {
    pub trip_types: Vec<String>,
    pub airports: Vec<String>,
    pub travel_months: String,
    pub trip_length: Option<u32>,
    pub max_flight_length: Option<u32>,
    pub direct_flights: bool,
    #[serde(default)]
    pub preferences: String,
}

impl TripRequest {
    /// Collects every problem at once so the form can list them together.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.travel_months.trim().is_empty() {
            errors.push("Preferred travel months are required".to_string());
        }
        match self.trip_length {
            None => errors.push("Trip length is required".to_string()),
            Some(0) => errors.push("Trip length must be a positive number".to_string()),
            Some(_) => {}
        }
        match self.max_flight_length {
            None => errors.push("Maximum flight length is required".to_string()),
            Some(0) => {
                errors.push("Maximum flight length must be a positive number".to_string())
            }
            Some(_) => {}
        }
        if self.airports.iter().all(|a| a.trim().is_empty()) {
            errors.push("At least one departure airport is required".to_string());
        }
        if self.trip_types.is_empty() {
            errors.push("At least one trip type is required".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Non-empty free-text preference lines; several of them make generation slower.
    pub fn preference_line_count(&self) -> usize {
        self.preferences
            .lines()
            .filter(|l| !l.trim().is_empty())
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// Already at the limit; nothing changed.
    LimitReached,
}

/// Trip types picked in the form, in selection order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripTypeSelection {
    selected: Vec<String>,
}

impl TripTypeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, trip_type: &str) -> ToggleOutcome {
        if let Some(pos) = self.selected.iter().position(|t| t == trip_type) {
            self.selected.remove(pos);
            ToggleOutcome::Deselected
        } else if self.selected.len() < MAX_TRIP_TYPES {
            self.selected.push(trip_type.to_string());
            ToggleOutcome::Selected
        } else {
            ToggleOutcome::LimitReached
        }
    }

    pub fn is_selected(&self, trip_type: &str) -> bool {
        self.selected.iter().any(|t| t == trip_type)
    }

    /// Unselected choices are disabled once the limit is hit.
    pub fn is_disabled(&self, trip_type: &str) -> bool {
        !self.is_selected(trip_type) && self.selected.len() >= MAX_TRIP_TYPES
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }
}

/// Departure airport codes chosen through autocomplete.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AirportSelection {
    codes: Vec<String>,
}

impl AirportSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for blanks and codes already chosen.
    pub fn add(&mut self, code: &str) -> bool {
        let code = code.trim().to_uppercase();
        if code.is_empty() || self.codes.contains(&code) {
            return false;
        }
        self.codes.push(code);
        true
    }

    pub fn remove(&mut self, code: &str) -> bool {
        let code = code.trim().to_uppercase();
        let before = self.codes.len();
        self.codes.retain(|c| *c != code);
        self.codes.len() != before
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}

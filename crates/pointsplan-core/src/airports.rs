// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Shortest query that triggers suggestions.
pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
}

impl Airport {
    /// Text placed in the input once a suggestion is picked.
    pub fn label(&self) -> String {
        format!("{} - {}, {}", self.code, self.name, self.city)
    }

    fn matches(&self, query_upper: &str) -> bool {
        self.code.contains(query_upper)
            || self.city.to_uppercase().contains(query_upper)
            || self.name.to_uppercase().contains(query_upper)
    }
}

static BUILTIN: OnceLock<Vec<Airport>> = OnceLock::new();

fn builtin_airports() -> &'static [Airport] {
    BUILTIN.get_or_init(|| {
        serde_json::from_str(include_str!("../data/airports.json"))
            .expect("Failed to parse airports.json")
    })
}

/// Static departure-airport directory used for autocomplete.
pub struct AirportDirectory<'a> {
    airports: &'a [Airport],
}

impl AirportDirectory<'static> {
    /// The bundled list of busiest US airports.
    pub fn builtin() -> Self {
        Self {
            airports: builtin_airports(),
        }
    }
}

impl<'a> AirportDirectory<'a> {
    pub fn new(airports: &'a [Airport]) -> Self {
        Self { airports }
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&'a Airport> {
        let code = code.trim().to_uppercase();
        self.airports.iter().find(|a| a.code == code)
    }

    /// Case-insensitive substring match on code, city and name, in directory order.
    pub fn search(&self, query: &str) -> Vec<&'a Airport> {
        let query = query.trim().to_uppercase();
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }
        self.airports
            .iter()
            .filter(|a| a.matches(&query))
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}

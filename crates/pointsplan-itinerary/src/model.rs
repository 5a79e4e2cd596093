// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    #[default]
    Economy,
    Luxury,
}

impl OptionKind {
    /// Classifies an option by its fare class. Matching is case-sensitive,
    /// so "business" in lowercase stays economy.
    pub fn from_fare_class(fare_class: Option<&str>) -> Self {
        match fare_class {
            Some(fc) if ["Business", "First", "Premium"].iter().any(|k| fc.contains(k)) => {
                OptionKind::Luxury
            }
            _ => OptionKind::Economy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Economy => "Economy",
            OptionKind::Luxury => "Luxury",
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One travel package (flight + hotel + value breakdown) inside a destination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TravelOption {
    pub kind: OptionKind,
    pub route: Option<String>,
    pub airline: Option<String>,
    pub flight_points_program: Option<String>,
    pub points_used: Option<String>,
    pub fare_class: Option<String>,
    pub property: Option<String>,
    pub hotel_points_program: Option<String>,
    pub total_points_needed: Option<String>,
    pub property_details: Option<String>,
    pub total_points_used: Option<String>,
    pub airline_points_value: Option<String>,
    pub hotel_points_value: Option<String>,
    pub dollar_value_saved: Option<String>,
}

impl TravelOption {
    /// Labeled flight fields in display order.
    pub fn flight_fields(&self) -> Vec<(&'static str, &str)> {
        collect_present(&[
            ("Route", &self.route),
            ("Airline", &self.airline),
            ("Points Program", &self.flight_points_program),
            ("Points Used", &self.points_used),
            ("Fare Class", &self.fare_class),
        ])
    }

    pub fn hotel_fields(&self) -> Vec<(&'static str, &str)> {
        collect_present(&[
            ("Property", &self.property),
            ("Points Program", &self.hotel_points_program),
            ("Total Points Needed", &self.total_points_needed),
            ("Property Details", &self.property_details),
        ])
    }

    pub fn value_fields(&self) -> Vec<(&'static str, &str)> {
        collect_present(&[
            ("Total Points Used", &self.total_points_used),
            ("Airline", &self.airline_points_value),
            ("Hotel", &self.hotel_points_value),
            ("Dollar Value Saved", &self.dollar_value_saved),
        ])
    }

    /// True when no field at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.flight_fields().is_empty()
            && self.hotel_fields().is_empty()
            && self.value_fields().is_empty()
    }
}

fn collect_present<'a>(
    fields: &[(&'static str, &'a Option<String>)],
) -> Vec<(&'static str, &'a str)> {
    fields
        .iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (*label, v)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationCategory {
    /// Heading text without enumeration prefix or trailing colon.
    /// Empty for items that appeared before any heading.
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// 1-based position in the parsed output, not the number in the source text.
    pub index: usize,
    pub name: String,
    pub preference_match: Option<String>,
    pub summary: Option<String>,
    pub recommendations: Vec<RecommendationCategory>,
    pub economy: TravelOption,
    pub luxury: TravelOption,
}

impl Destination {
    pub fn is_valid(&self) -> bool {
        !self.economy.is_empty()
            && !self.luxury.is_empty()
            && self.name != crate::UNKNOWN_DESTINATION
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

//! Parser for the free-text itineraries returned by the trip generator.
//!
//! The upstream text is loosely structured: destinations are separated by
//! `DESTINATION <n> -` lines and each holds an economy and a luxury option
//! with labeled flight, hotel and value fields. Parsing never fails; blocks
//! that cannot be understood are skipped and reported.

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

pub mod display;
pub mod model;
pub mod options;
pub mod recommendations;
pub mod segment;

pub use display::display_value;
pub use model::{Destination, OptionKind, RecommendationCategory, TravelOption};
pub use options::extract_option;
pub use recommendations::format_recommendations;

/// Placeholder name the generator emits when it has nothing real to suggest.
pub const UNKNOWN_DESTINATION: &str = "Unknown Destination";

/// Blocks with fewer content lines than this are considered truncated.
pub const MIN_BLOCK_LINES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub enum SkipReason {
    #[error("incomplete destination data ({lines} content lines)")]
    TooShort { lines: usize },
    #[error("no economy or luxury option markers")]
    MissingOptions,
    #[error("economy option present but luxury option missing")]
    MissingLuxury,
    #[error("{0} option has no recognizable fields")]
    EmptyOption(OptionKind),
    #[error("placeholder destination")]
    UnknownDestination,
}

/// Diagnostic for a destination block that was left out of the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedBlock {
    /// 1-based position among the blocks found in the input.
    pub position: usize,
    pub name: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParseReport {
    pub destinations: Vec<Destination>,
    pub skipped: Vec<SkippedBlock>,
}

impl ParseReport {
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

/// Parses an itinerary into its valid destinations.
pub fn parse_itinerary(text: &str) -> Vec<Destination> {
    parse_itinerary_report(text).destinations
}

/// Parses an itinerary and keeps a record of every block that was dropped.
pub fn parse_itinerary_report(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (i, block) in segment::split_blocks(text).into_iter().enumerate() {
        let position = i + 1;
        match parse_block(block) {
            Ok(mut destination) => {
                destination.index = report.destinations.len() + 1;
                report.destinations.push(destination);
            }
            Err((name, reason)) => {
                warn!(
                    "Skipping destination block — position={} name={:?} reason={}",
                    position, name, reason
                );
                report.skipped.push(SkippedBlock {
                    position,
                    name,
                    reason,
                });
            }
        }
    }

    debug!(
        "Parsed itinerary — destinations={} skipped={}",
        report.destinations.len(),
        report.skipped.len()
    );
    report
}

fn parse_block(block: &str) -> Result<Destination, (String, SkipReason)> {
    let lines = segment::content_lines(block);
    let name = segment::header_name(&lines);

    if lines.len() < MIN_BLOCK_LINES {
        return Err((name, SkipReason::TooShort { lines: lines.len() }));
    }
    if name == UNKNOWN_DESTINATION {
        return Err((name, SkipReason::UnknownDestination));
    }

    let texts = match options::split_options(block) {
        Ok(texts) => texts,
        Err(options::SplitError::NoMarkers) => return Err((name, SkipReason::MissingOptions)),
        Err(options::SplitError::NoLuxury) => return Err((name, SkipReason::MissingLuxury)),
    };

    let economy = extract_option(texts.economy);
    if economy.is_empty() {
        return Err((name, SkipReason::EmptyOption(OptionKind::Economy)));
    }
    let luxury = extract_option(texts.luxury);
    if luxury.is_empty() {
        return Err((name, SkipReason::EmptyOption(OptionKind::Luxury)));
    }

    let narrative = segment::narrative_sections(&lines);
    let summary = Some(narrative.summary.join("\n")).filter(|s| !s.is_empty());

    Ok(Destination {
        index: 0,
        preference_match: segment::preference_match(&lines),
        summary,
        recommendations: format_recommendations(&narrative.recommendation),
        economy,
        luxury,
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(name: &str) -> String {
        format!(
            "DESTINATION 1 - {name}\nPreference Match: Quiet beaches\n\
             OPTION A - ECONOMY EXPERIENCE\nFlight Details:\n- Route: SEA-HNL\n\
             OPTION B - LUXURY EXPERIENCE\nFlight Details:\n- Fare Class: First\n"
        )
    }

    #[test]
    fn test_preference_match_captured() {
        let dests = parse_itinerary(&block("Kauai, USA:"));
        assert_eq!(dests.len(), 1);
        assert_eq!(dests[0].name, "Kauai, USA");
        assert_eq!(dests[0].preference_match.as_deref(), Some("Quiet beaches"));
        assert_eq!(dests[0].summary, None);
        assert!(dests[0].recommendations.is_empty());
        assert!(dests[0].is_valid());
    }

    #[test]
    fn test_unknown_destination_skipped() {
        let report = parse_itinerary_report(&block("Unknown Destination"));
        assert!(report.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::UnknownDestination);
    }

    #[test]
    fn test_empty_option_skipped() {
        let text = "DESTINATION 1 - Oslo\nline one\nline two\n\
                    OPTION A - ECONOMY EXPERIENCE\nsome prose only\n\
                    OPTION B - LUXURY EXPERIENCE\n- Route: JFK-OSL";
        let report = parse_itinerary_report(text);
        assert!(report.is_empty());
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::EmptyOption(OptionKind::Economy)
        );
    }

    #[test]
    fn test_index_follows_output_position() {
        let text = format!(
            "DESTINATION 7 - Short\nonly\n{}{}",
            block("Maui").replace("DESTINATION 1", "DESTINATION 8"),
            block("Lanai").replace("DESTINATION 1", "DESTINATION 9")
        );
        let report = parse_itinerary_report(&text);
        let indexes: Vec<usize> = report.destinations.iter().map(|d| d.index).collect();
        assert_eq!(indexes, vec![1, 2]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].position, 1);
    }
}

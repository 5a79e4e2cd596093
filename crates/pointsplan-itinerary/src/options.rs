// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use crate::model::{OptionKind, TravelOption};
use crate::segment::{is_filler, strip_bullet, strip_enumeration};
use regex::Regex;
use std::sync::OnceLock;

pub(crate) fn economy_marker_re() -> &'static Regex {
    static ECONOMY_RE: OnceLock<Regex> = OnceLock::new();
    ECONOMY_RE.get_or_init(|| Regex::new(r"(?i)OPTION A - ECONOMY EXPERIENCE").unwrap())
}

fn luxury_marker_re() -> &'static Regex {
    static LUXURY_RE: OnceLock<Regex> = OnceLock::new();
    LUXURY_RE.get_or_init(|| Regex::new(r"(?i)OPTION B - LUXURY EXPERIENCE").unwrap())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// Neither option marker is present.
    NoMarkers,
    /// Economy marker present, luxury marker absent.
    NoLuxury,
}

/// Raw economy/luxury halves of a destination block.
#[derive(Debug, PartialEq)]
pub struct OptionTexts<'a> {
    pub economy: &'a str,
    pub luxury: &'a str,
}

/// Splits a block at the option markers.
///
/// When only the luxury marker exists, everything after the header line up to
/// it is treated as the economy half.
pub fn split_options(block: &str) -> Result<OptionTexts<'_>, SplitError> {
    let economy = economy_marker_re().find(block);
    let search_from = economy.map(|m| m.end()).unwrap_or(0);
    let luxury = luxury_marker_re().find_at(block, search_from);

    match (economy, luxury) {
        (Some(e), Some(l)) => Ok(OptionTexts {
            economy: trim_marker_tail(&block[e.end()..l.start()]),
            luxury: trim_marker_tail(&block[l.end()..]),
        }),
        (None, Some(l)) => {
            let header_end = block.find('\n').map(|i| i + 1).unwrap_or(0).min(l.start());
            Ok(OptionTexts {
                economy: trim_marker_tail(&block[header_end..l.start()]),
                luxury: trim_marker_tail(&block[l.end()..]),
            })
        }
        (Some(_), None) => Err(SplitError::NoLuxury),
        (None, None) => Err(SplitError::NoMarkers),
    }
}

/// Markers are sometimes written with a trailing colon; drop it with the whitespace.
fn trim_marker_tail(text: &str) -> &str {
    let text = text.trim_start_matches([' ', '\t']);
    text.strip_prefix(':').unwrap_or(text).trim()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Flight,
    Hotel,
    Value,
}

fn section_marker(line: &str) -> Option<Section> {
    let heading = strip_enumeration(strip_bullet(line)).trim_matches('*');
    let heading = heading.strip_suffix(':').unwrap_or(heading).trim_matches('*').trim();
    match heading {
        "Flight Details" => Some(Section::Flight),
        "Hotel Option" | "Hotel Options" => Some(Section::Hotel),
        "Value Analysis" => Some(Section::Value),
        _ => None,
    }
}

/// Extracts labeled fields from one option's text. Unknown labels are ignored
/// and missing ones stay `None`.
///
/// The first non-empty value of a field wins: a bare `Route:` line is skipped
/// and a later `Route: X` still fills the field. Markdown bold around a label
/// (`**Route:** X`) is tolerated.
pub fn extract_option(text: &str) -> TravelOption {
    let mut opt = TravelOption::default();
    let mut section = Section::Preamble;

    for raw in text.lines() {
        if is_filler(raw) {
            continue;
        }
        if let Some(next) = section_marker(raw) {
            section = next;
            continue;
        }

        let Some((label, value)) = strip_bullet(raw).split_once(':') else {
            continue;
        };
        let label = label.trim().trim_matches('*').trim();
        let value = value.trim_start_matches([' ', '*']).trim();
        if value.is_empty() {
            continue;
        }

        let slot = match (label, section) {
            ("Route", _) => &mut opt.route,
            ("Airline", Section::Value) => &mut opt.airline_points_value,
            ("Airline", _) => &mut opt.airline,
            ("Hotel", Section::Value) => &mut opt.hotel_points_value,
            ("Points Program", Section::Flight) => &mut opt.flight_points_program,
            ("Points Program", Section::Hotel) => &mut opt.hotel_points_program,
            ("Points Used", _) => &mut opt.points_used,
            ("Fare Class", _) => &mut opt.fare_class,
            ("Property", _) => &mut opt.property,
            ("Property Details", _) => &mut opt.property_details,
            ("Total Points Needed", _) => &mut opt.total_points_needed,
            ("Total Points Used", _) => &mut opt.total_points_used,
            ("Dollar Value Saved", _) => &mut opt.dollar_value_saved,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    opt.kind = OptionKind::from_fare_class(opt.fare_class.as_deref());
    opt
}

#[cfg(test)]
mod tests {
    use super::*;

    const ECONOMY: &str = "Flight Details:
- Route: LAX to NRT
- Airline: ANA
- Points Program: Virgin Atlantic Flying Club
- Points Used: 60,000 points round trip
- Fare Class: Economy

Hotel Option:
- Property: Hyatt Place Tokyo Bay
- Points Program: World of Hyatt
- Total Points Needed: 48,000 points (8,000 points per night)
- Property Details: Near Maihama station

Value Analysis:
- Total Points Used: 108,000
- Points Breakdown:
  * Airline: 60,000 points (Virgin Atlantic)
  * Hotel: 48,000 points (World of Hyatt)
- Dollar Value Saved: Approx. $2,100";

    #[test]
    fn test_extract_all_sections() {
        let opt = extract_option(ECONOMY);
        assert_eq!(opt.route.as_deref(), Some("LAX to NRT"));
        assert_eq!(opt.airline.as_deref(), Some("ANA"));
        assert_eq!(
            opt.flight_points_program.as_deref(),
            Some("Virgin Atlantic Flying Club")
        );
        assert_eq!(opt.hotel_points_program.as_deref(), Some("World of Hyatt"));
        assert_eq!(opt.property.as_deref(), Some("Hyatt Place Tokyo Bay"));
        assert_eq!(opt.property_details.as_deref(), Some("Near Maihama station"));
        assert_eq!(
            opt.airline_points_value.as_deref(),
            Some("60,000 points (Virgin Atlantic)")
        );
        assert_eq!(
            opt.hotel_points_value.as_deref(),
            Some("48,000 points (World of Hyatt)")
        );
        assert_eq!(opt.dollar_value_saved.as_deref(), Some("Approx. $2,100"));
        assert_eq!(opt.total_points_used.as_deref(), Some("108,000"));
        assert_eq!(opt.kind, OptionKind::Economy);
    }

    #[test]
    fn test_value_airline_does_not_override_identity() {
        let opt = extract_option(
            "Value Analysis:\n* Airline: 70,000 points\nFlight Details:\n- Airline: Delta",
        );
        assert_eq!(opt.airline.as_deref(), Some("Delta"));
        assert_eq!(opt.airline_points_value.as_deref(), Some("70,000 points"));
    }

    #[test]
    fn test_points_program_outside_sections_ignored() {
        let opt = extract_option("- Points Program: Orphan\nHotel Option:\n- Points Program: Hilton Honors");
        assert_eq!(opt.flight_points_program, None);
        assert_eq!(opt.hotel_points_program.as_deref(), Some("Hilton Honors"));
    }

    #[test]
    fn test_similar_labels_stay_apart() {
        let opt = extract_option("- Property Details: Beachfront\n- Total Points Used: 5\n- Property: Andaz");
        assert_eq!(opt.property.as_deref(), Some("Andaz"));
        assert_eq!(opt.property_details.as_deref(), Some("Beachfront"));
        assert_eq!(opt.points_used, None);
    }

    #[test]
    fn test_luxury_classification_from_fare_class() {
        let opt = extract_option("Flight Details:\n- Fare Class: First Class");
        assert_eq!(opt.kind, OptionKind::Luxury);
    }

    #[test]
    fn test_split_both_markers() {
        let block = "Lisbon\nOPTION A - ECONOMY EXPERIENCE:\n- Route: A\nOPTION B - LUXURY EXPERIENCE\n- Route: B";
        let texts = split_options(block).unwrap();
        assert_eq!(texts.economy, "- Route: A");
        assert_eq!(texts.luxury, "- Route: B");
    }

    #[test]
    fn test_split_is_case_insensitive() {
        let block = "Lisbon\noption a - economy experience\n- Route: A\nOption B - Luxury Experience\n- Route: B";
        assert!(split_options(block).is_ok());
    }

    #[test]
    fn test_split_missing_markers() {
        assert_eq!(
            split_options("Lisbon\nOPTION A - ECONOMY EXPERIENCE\n- Route: A"),
            Err(SplitError::NoLuxury)
        );
        assert_eq!(split_options("Lisbon\n- Route: A"), Err(SplitError::NoMarkers));
    }

    #[test]
    fn test_split_luxury_only() {
        let texts = split_options("Lisbon\n- Route: A\nOPTION B - LUXURY EXPERIENCE\n- Route: B").unwrap();
        assert_eq!(texts.economy, "- Route: A");
        assert_eq!(texts.luxury, "- Route: B");
    }

    #[test]
    fn test_bare_label_does_not_claim_field() {
        let opt = extract_option("Flight Details:\n- Route:\n- Route: SFO-LIS\n- Route: OAK-LIS");
        assert_eq!(opt.route.as_deref(), Some("SFO-LIS"));
    }

    #[test]
    fn test_markdown_bold_labels() {
        let opt = extract_option(
            "**Flight Details:**\n- **Route:** JFK-ATH\n**Points Program:** Aeroplan\n\
             **Hotel Option:**\n- **Points Program:** Marriott Bonvoy",
        );
        assert_eq!(opt.route.as_deref(), Some("JFK-ATH"));
        assert_eq!(opt.flight_points_program.as_deref(), Some("Aeroplan"));
        assert_eq!(opt.hotel_points_program.as_deref(), Some("Marriott Bonvoy"));
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Display form of an extracted value: "round trip" becomes "RT".
/// Stored values are never rewritten, so comparisons see the original text.
pub fn display_value(value: &str) -> Cow<'_, str> {
    static ROUND_TRIP_RE: OnceLock<Regex> = OnceLock::new();
    let re = ROUND_TRIP_RE.get_or_init(|| Regex::new(r"(?i)round trip").unwrap());
    re.replace_all(value, "RT")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_shortened() {
        assert_eq!(display_value("70,000 points round trip"), "70,000 points RT");
        assert_eq!(display_value("Round Trip economy"), "RT economy");
    }

    #[test]
    fn test_untouched_value_borrows() {
        assert!(matches!(display_value("LAX-CDG"), Cow::Borrowed("LAX-CDG")));
    }
}

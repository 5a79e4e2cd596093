// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use crate::model::RecommendationCategory;
use crate::segment::{is_filler, strip_enumeration};

/// Heading whose whole category is withheld from display.
pub const SUPPRESSED_CATEGORY: &str = "Requirements Match:";

const LIST_MARKERS: [&str; 3] = ["- ", "• ", "✓ "];

/// Groups recommendation lines into headed lists.
///
/// A line ending in `:` opens a category, with any list marker or `N. `
/// prefix removed from its name. `Requirements Match:` swallows
/// everything until the next heading. Headings with no items are dropped.
pub fn format_recommendations<S: AsRef<str>>(lines: &[S]) -> Vec<RecommendationCategory> {
    let mut categories = Vec::new();
    let mut current: Option<RecommendationCategory> = None;
    let mut suppressed = false;

    for line in lines.iter().map(|l| l.as_ref().trim()) {
        if is_filler(line) {
            continue;
        }

        if line.ends_with(':') {
            flush(&mut categories, current.take());
            let heading = strip_enumeration(strip_list_marker(line));
            suppressed = heading == SUPPRESSED_CATEGORY;
            if !suppressed {
                current = Some(RecommendationCategory {
                    category: heading.trim_end_matches(':').trim().to_string(),
                    items: Vec::new(),
                });
            }
            continue;
        }

        if suppressed {
            continue;
        }

        let item = strip_list_marker(line);
        if item.is_empty() {
            continue;
        }
        current
            .get_or_insert_with(RecommendationCategory::default)
            .items
            .push(item.to_string());
    }

    flush(&mut categories, current);
    categories
}

fn strip_list_marker(line: &str) -> &str {
    LIST_MARKERS
        .iter()
        .find_map(|m| line.strip_prefix(*m))
        .unwrap_or(line)
        .trim()
}

fn flush(categories: &mut Vec<RecommendationCategory>, category: Option<RecommendationCategory>) {
    if let Some(c) = category.filter(|c| !c.items.is_empty()) {
        categories.push(c);
    }
}

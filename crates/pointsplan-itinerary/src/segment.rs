// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use crate::options::economy_marker_re;
use regex::Regex;
use std::sync::OnceLock;

pub const SUMMARY_MARKERS: [&str; 2] = ["DESTINATION SUMMARY:", "Overview:"];
pub const RECOMMENDATION_MARKER: &str = "Why We Recommend This Destination:";
pub const ECONOMY_EXPERIENCE_MARKER: &str = "Economy Experience:";
pub const PREFERENCE_MATCH_LABEL: &str = "Preference Match:";

fn boundary_re() -> &'static Regex {
    static BOUNDARY_RE: OnceLock<Regex> = OnceLock::new();
    BOUNDARY_RE.get_or_init(|| Regex::new(r"DESTINATION\s*\d+\s*-").unwrap())
}

fn enumeration_re() -> &'static Regex {
    static ENUM_RE: OnceLock<Regex> = OnceLock::new();
    ENUM_RE.get_or_init(|| Regex::new(r"^\d+\.\s+").unwrap())
}

/// Splits raw response text into trimmed destination blocks.
///
/// Text before the first `DESTINATION <n> -` boundary is not a block; an
/// input without any boundary therefore yields nothing.
pub fn split_blocks(text: &str) -> Vec<&str> {
    let re = boundary_re();
    let starts: Vec<usize> = re.find_iter(text).map(|m| m.end()).collect();
    let ends: Vec<usize> = re
        .find_iter(text)
        .map(|m| m.start())
        .skip(1)
        .chain(std::iter::once(text.len()))
        .collect();

    starts
        .into_iter()
        .zip(ends)
        .map(|(start, end)| text[start..end].trim())
        .filter(|block| !block.is_empty())
        .collect()
}

/// Blank lines and lone `-`, `--` or `•` carry no content anywhere in a block.
pub fn is_filler(line: &str) -> bool {
    matches!(line.trim(), "" | "-" | "--" | "•")
}

/// Trimmed lines of a block with filler removed.
pub fn content_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(str::trim)
        .filter(|l| !is_filler(l))
        .collect()
}

/// Removes a leading `-`, `*` or `•` bullet.
pub fn strip_bullet(line: &str) -> &str {
    let line = line.trim_start();
    line.strip_prefix(['-', '*', '•'])
        .map(str::trim_start)
        .unwrap_or(line)
}

/// Removes a leading `<digits>. ` enumeration prefix.
pub fn strip_enumeration(line: &str) -> &str {
    match enumeration_re().find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Destination name from the first content line, trailing colon dropped.
pub fn header_name(lines: &[&str]) -> String {
    lines
        .first()
        .map(|l| l.strip_suffix(':').unwrap_or(l).trim().to_string())
        .unwrap_or_default()
}

pub fn preference_match(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find_map(|l| l.strip_prefix(PREFERENCE_MATCH_LABEL))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Summary and recommendation lines located between their markers.
#[derive(Debug, Default, PartialEq)]
pub struct NarrativeSections<'a> {
    pub summary: Vec<&'a str>,
    pub recommendation: Vec<&'a str>,
}

/// Both sections are empty unless a summary marker is followed by the
/// recommendation marker.
pub fn narrative_sections<'a>(lines: &[&'a str]) -> NarrativeSections<'a> {
    let summary_at = lines.iter().position(|l| SUMMARY_MARKERS.contains(l));
    let recommend_at = lines.iter().position(|l| *l == RECOMMENDATION_MARKER);

    let (s, r) = match (summary_at, recommend_at) {
        (Some(s), Some(r)) if s < r => (s, r),
        _ => return NarrativeSections::default(),
    };

    let after = &lines[r + 1..];
    let end = after
        .iter()
        .position(|l| is_options_start(l))
        .unwrap_or(after.len());

    NarrativeSections {
        summary: lines[s + 1..r].to_vec(),
        recommendation: after[..end].to_vec(),
    }
}

/// Case-sensitive `OPTION A`, the full economy marker in any case, or the bare
/// `Economy Experience:` heading. Headings like `Option Availability:` do not count.
fn is_options_start(line: &str) -> bool {
    line.contains("OPTION A")
        || economy_marker_re().is_match(line)
        || line == ECONOMY_EXPERIENCE_MARKER
}

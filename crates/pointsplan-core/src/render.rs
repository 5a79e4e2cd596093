// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

//! HTML card markup for parsed destinations.
//!
//! Only structure and class names are produced; styling belongs to the page.
//! Every value from the upstream text is escaped and display-normalized.

use crate::error::{PlannerError, NO_DESTINATIONS_MESSAGE};
use html_escape::{encode_double_quoted_attribute, encode_text};
use pointsplan_itinerary::{display_value, Destination, RecommendationCategory, TravelOption};
use std::fmt::Write;

/// Renders the results view. An empty slice renders the single failure notice.
pub fn render_results(destinations: &[Destination]) -> String {
    let mut html = String::from("<div class=\"trip-results-container\">");
    if destinations.is_empty() {
        push_alert(&mut html, "alert-danger", None, NO_DESTINATIONS_MESSAGE);
    }
    for destination in destinations {
        render_destination(&mut html, destination);
    }
    html.push_str("</div>");
    html
}

/// Renders the notice for a request that produced no results at all.
pub fn render_failure(error: &PlannerError) -> String {
    let mut html = String::new();
    push_alert(&mut html, "alert-danger", Some("Error:"), &error.user_message());
    html
}

fn push_alert(html: &mut String, class: &str, title: Option<&str>, message: &str) {
    let _ = write!(html, "<div class=\"alert {}\">", class);
    if let Some(title) = title {
        let _ = write!(html, "<strong>{}</strong> ", encode_text(title));
    }
    let _ = write!(html, "{}</div>", encode_text(message));
}

fn render_destination(html: &mut String, d: &Destination) {
    let _ = write!(
        html,
        "<div class=\"destination-section mb-5\"><h2 class=\"destination-header mb-3\">Destination {} - {}</h2>",
        d.index,
        text(&d.name)
    );

    if let Some(pref) = &d.preference_match {
        let _ = write!(
            html,
            "<div class=\"preference-match mb-3\"><strong>Preference Match:</strong> {}</div>",
            text(pref)
        );
    }

    if let Some(summary) = &d.summary {
        html.push_str("<div class=\"destination-summary\">");
        for paragraph in summary.lines() {
            let _ = write!(html, "<p>{}</p>", text(paragraph));
        }
        html.push_str("</div>");
    }

    if !d.recommendations.is_empty() {
        html.push_str("<div class=\"recommendations\">");
        for category in &d.recommendations {
            render_category(html, category);
        }
        html.push_str("</div>");
    }

    html.push_str("<div class=\"row\">");
    render_option(html, "Economy Experience", &d.economy);
    render_option(html, "Luxury Experience", &d.luxury);
    html.push_str("</div></div>");
}

fn render_category(html: &mut String, category: &RecommendationCategory) {
    html.push_str("<div class=\"recommendation-category\">");
    if !category.category.is_empty() {
        let _ = write!(html, "<h4>{}</h4>", text(&category.category));
    }
    html.push_str("<ul>");
    for item in &category.items {
        let _ = write!(html, "<li>{}</li>", text(item));
    }
    html.push_str("</ul></div>");
}

fn render_option(html: &mut String, heading: &str, option: &TravelOption) {
    let kind = option.kind.label();
    let _ = write!(
        html,
        "<div class=\"col-md-6\"><div class=\"option-section\" data-kind=\"{}\"><h3 class=\"option-header\">{}</h3><div class=\"option-content\">",
        encode_double_quoted_attribute(&kind.to_lowercase()),
        heading
    );

    render_box(html, "Flight Details", &option.flight_fields());
    render_box(html, "Hotel Option", &option.hotel_fields());
    render_box(html, "Value Analysis", &option.value_fields());

    let _ = write!(
        html,
        "</div><button type=\"button\" class=\"btn book-option\" data-kind=\"{}\">Book {}</button></div></div>",
        encode_double_quoted_attribute(&kind.to_lowercase()),
        kind
    );
}

fn render_box(html: &mut String, title: &str, fields: &[(&str, &str)]) {
    if fields.is_empty() {
        return;
    }
    let _ = write!(html, "<div class=\"detail-box\"><h4>{}</h4><ul>", title);
    for (label, value) in fields {
        let _ = write!(
            html,
            "<li><span class=\"detail-label\">{}:</span> <span class=\"detail-value\">{}</span></li>",
            label,
            text(value)
        );
    }
    html.push_str("</ul></div>");
}

fn text(value: &str) -> String {
    encode_text(&display_value(value)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointsplan_itinerary::parse_itinerary;

    const BODY: &str = "DESTINATION 1 - Paris <Rive Gauche>\nOverview:\nCity of light\nWhy We Recommend This Destination:\nRequirements Match:\n- Nonstop from LAX\nFood:\n- Great food\nOPTION A - ECONOMY EXPERIENCE\nFlight Details:\n- Route: LAX-CDG\n- Points Used: 60,000 points round trip\nOPTION B - LUXURY EXPERIENCE\nFlight Details:\n- Fare Class: Business\nHotel Option:\n- Property: Hotel Y & Spa";

    #[test]
    fn test_empty_results_show_notice_once() {
        let html = render_results(&[]);
        assert_eq!(html.matches(NO_DESTINATIONS_MESSAGE).count(), 1);
        assert!(!html.contains("destination-section"));
    }

    #[test]
    fn test_destination_card() {
        let html = render_results(&parse_itinerary(BODY));
        assert!(html.contains("Destination 1 - Paris &lt;Rive Gauche&gt;"));
        assert!(html.contains("<p>City of light</p>"));
        assert!(html.contains("<h4>Food</h4>"));
        assert!(html.contains("<li>Great food</li>"));
        assert!(!html.contains("Nonstop from LAX"));
        assert!(html.contains("60,000 points RT"));
        assert!(html.contains("Hotel Y &amp; Spa"));
        assert!(html.contains("Book Economy"));
        assert!(html.contains("Book Luxury"));
    }

    #[test]
    fn test_empty_detail_boxes_omitted() {
        let html = render_results(&parse_itinerary(BODY));
        // Economy has no hotel fields, luxury has one.
        assert_eq!(html.matches("<h4>Hotel Option</h4>").count(), 1);
        assert_eq!(html.matches("<h4>Value Analysis</h4>").count(), 0);
    }

    #[test]
    fn test_failure_notice_uses_user_message() {
        let html = render_failure(&PlannerError::Upstream(Some("Quota <exceeded>".into())));
        assert!(html.contains("<strong>Error:</strong> Quota &lt;exceeded&gt;"));
    }
}

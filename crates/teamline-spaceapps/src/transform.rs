//! Normalization of raw team nodes into persistable records.

use teamline_store::{ChallengeRow, HarvestedRecord, LocationRow};

use crate::schema::{LocationDetails, TeamNode};

/// Label used when the source gives no location block at all.
const VIRTUAL_LABEL: &str = "Virtual / Global";

/// Treat empty strings like missing values (the source emits both).
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Resolve the display label for an optional location block.
///
/// No block at all means a virtual team. Otherwise the city label prefers
/// a non-blank `displayName`, then `title`. With both a city and a country
/// the label is "City, Country"; with only one, that one; with neither,
/// "Unknown City".
pub fn location_label(details: Option<&LocationDetails>) -> String {
    let Some(details) = details else {
        return VIRTUAL_LABEL.to_string();
    };
    let city = non_empty(details.display_name.clone()).or_else(|| non_empty(details.title.clone()));
    let country = non_empty(details.country.clone());
    match (city, country) {
        (Some(city), Some(country)) => format!("{city}, {country}"),
        (Some(city), None) => city,
        (None, Some(country)) => country,
        (None, None) => "Unknown City".to_string(),
    }
}

/// Concatenate nomination then award badges; `None` when both lists are empty.
fn join_badges(node: &TeamNode) -> Option<String> {
    let badges: Vec<&str> = node
        .nomination_badges
        .iter()
        .chain(node.award_badges.iter())
        .map(String::as_str)
        .collect();
    if badges.is_empty() {
        None
    } else {
        Some(badges.join(", "))
    }
}

/// Map one raw node to a normalized record.
///
/// Total: every node maps to a record, with literal fallbacks where the
/// source omitted a field. A missing link falls back to "N/A", which is a
/// collidable dedup key, a known quirk of the source kept as-is.
pub fn normalize(node: TeamNode) -> HarvestedRecord {
    let name = node
        .project_details
        .as_ref()
        .and_then(|p| non_empty(p.name.clone()))
        .or_else(|| non_empty(node.title.clone()))
        .unwrap_or_else(|| "Untitled".to_string());

    let link = node
        .meta
        .as_ref()
        .and_then(|m| non_empty(m.relative_url.clone()))
        .unwrap_or_else(|| "N/A".to_string());

    let location = node
        .location_details
        .as_ref()
        .and_then(|details| {
            non_empty(details.id.clone()).map(|id| LocationRow {
                id,
                display_name: location_label(Some(details)),
                country: non_empty(details.country.clone()),
            })
        });

    let challenge = node
        .challenge_details
        .as_ref()
        .and_then(|details| {
            non_empty(details.id.clone()).map(|id| ChallengeRow {
                id,
                title: non_empty(details.title.clone())
                    .unwrap_or_else(|| "Unknown Challenge".to_string()),
                description: non_empty(details.excerpt.clone()),
            })
        });

    let badges = join_badges(&node);

    HarvestedRecord {
        name,
        link,
        location,
        challenge,
        badges,
    }
}

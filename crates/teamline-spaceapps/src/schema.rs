//! Typed raw page schema.
//!
//! Every nested block the source may omit or null out is an explicit
//! `Option`; the fallback chains live in [`crate::transform`], not here.

use serde::{Deserialize, Deserializer};

/// Deserialize null as empty Vec (badge lists come back as null, not [])
fn null_to_empty_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct PageResponse {
    #[serde(default)]
    pub data: Option<PageData>,
}

#[derive(Debug, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub teams: Option<TeamsConnection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsConnection {
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Edge {
    pub node: TeamNode,
}

/// One raw team item as returned by the source.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub project_details: Option<ProjectDetails>,
    #[serde(default)]
    pub challenge_details: Option<ChallengeDetails>,
    #[serde(default)]
    pub location_details: Option<LocationDetails>,
    #[serde(default, deserialize_with = "null_to_empty_vec")]
    pub nomination_badges: Vec<String>,
    #[serde(default, deserialize_with = "null_to_empty_vec")]
    pub award_badges: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    pub relative_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectDetails {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChallengeDetails {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetails {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl PageResponse {
    /// Dig out the edge list; `None` when the envelope is malformed.
    pub fn into_edges(self) -> Option<Vec<Edge>> {
        Some(self.data?.teams?.edges)
    }

    /// Dig out the total count from a count-only response.
    pub fn total_count(&self) -> Option<u64> {
        self.data.as_ref()?.teams.as_ref()?.total_count
    }
}

//! GraphQL query text and request bodies.

use serde_json::{Value, json};

/// Page query. Field list kept to what the store persists.
pub const PAGE_QUERY: &str = "\
query Teams($first: Int!, $after: String, $filtering: [Filter!]) {
  teams(first: $first, after: $after, filtering: $filtering) {
    edges {
      node {
        id
        title
        meta { relativeUrl }
        projectDetails { name }
        challengeDetails { id title excerpt }
        locationDetails { id title displayName country }
        nominationBadges
        awardBadges
      }
    }
  }
}";

/// Count-only query used to seed the partitioner.
pub const COUNT_QUERY: &str = "\
query Teams($filtering: [Filter!]) {
  teams(first: 1, filtering: $filtering) {
    totalCount
  }
}";

fn event_filter(event: &str) -> Value {
    json!([{ "field": "event", "value": event, "compare": "in" }])
}

/// Request body for one page fetch.
pub fn page_body(page_size: u64, cursor: &str, event: &str) -> Value {
    json!({
        "query": PAGE_QUERY,
        "variables": {
            "first": page_size,
            "after": cursor,
            "filtering": event_filter(event),
        },
    })
}

/// Request body for the count query.
pub fn count_body(event: &str) -> Value {
    json!({
        "query": COUNT_QUERY,
        "variables": { "filtering": event_filter(event) },
    })
}

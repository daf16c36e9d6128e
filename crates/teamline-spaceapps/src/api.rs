//! Space Apps GraphQL API calls.

use anyhow::Context;
use teamline_core::{HttpError, post_json};

use crate::config::Config;
use crate::cursor;
use crate::query;
use crate::schema::{Edge, PageResponse};

/// Error from fetching a single page.
///
/// Always a soft failure: the orchestrator logs it, counts the page as
/// failed, and keeps going.
#[derive(Debug)]
pub enum FetchError {
    Http(HttpError),
    /// Response body did not match the expected envelope.
    Malformed(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(e) => write!(f, "{e}"),
            Self::Malformed(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<HttpError> for FetchError {
    fn from(e: HttpError) -> Self {
        Self::Http(e)
    }
}

/// Fetch the raw edge list for the page starting at `offset`.
///
/// A response that parses but lacks the `data.teams` envelope is malformed;
/// a present but empty edge list is a normal exhausted page.
pub fn fetch_page(config: &Config, offset: u64) -> Result<Vec<Edge>, FetchError> {
    let token = cursor::encode(offset);
    let body = query::page_body(config.page_size, &token, &config.event);
    let text = post_json(&config.endpoint, &body, config.request_timeout)?;

    let response: PageResponse =
        serde_json::from_str(&text).map_err(|e| FetchError::Malformed(e.to_string()))?;
    response
        .into_edges()
        .ok_or_else(|| FetchError::Malformed("missing data.teams".to_string()))
}

/// Fetch the total matching record count that seeds the partitioner.
pub fn fetch_total(config: &Config) -> anyhow::Result<u64> {
    let body = query::count_body(&config.event);
    let text = post_json(&config.endpoint, &body, config.request_timeout)
        .context("count request failed")?;
    let response: PageResponse =
        serde_json::from_str(&text).context("count response is not valid JSON")?;
    response
        .total_count()
        .context("count response has no totalCount")
}

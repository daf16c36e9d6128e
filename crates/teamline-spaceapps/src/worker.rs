//! Per-page fetch unit: pause, fetch, normalize.

use teamline_store::HarvestedRecord;

use crate::api::{self, FetchError};
use crate::config::Config;
use crate::transform::normalize;

/// Fetch and normalize one page.
///
/// Pauses for a random interval first so parallel workers don't hit the
/// source in lockstep. An empty result means the page is exhausted, not
/// that anything failed.
pub fn harvest_page(config: &Config, offset: u64) -> Result<Vec<HarvestedRecord>, FetchError> {
    config.jitter.pause();

    let edges = api::fetch_page(config, offset)?;
    Ok(edges
        .into_iter()
        .map(|edge| normalize(edge.node))
        .collect())
}

//! Harvester configuration.

use std::time::Duration;

use teamline_core::JitterWindow;

/// Runtime configuration for one harvest run.
///
/// Constructed once and passed by reference; no process-global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// GraphQL endpoint of the source.
    pub endpoint: String,
    /// Event name used as the fixed page filter.
    pub event: String,
    /// Records requested per page.
    pub page_size: u64,
    /// Parallel fetch units.
    pub workers: usize,
    /// Whole-request timeout per page fetch.
    pub request_timeout: Duration,
    /// Bounds for the randomized pre-fetch pause.
    pub jitter: JitterWindow,
    /// Total assumed when the count request fails.
    pub fallback_total: u64,
    /// Cap on pages to fetch (for testing / partial harvests).
    pub max_pages: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://api.spaceappschallenge.org/graphql".to_string(),
            event: "2025 NASA Space Apps Challenge".to_string(),
            page_size: 50,
            workers: 5,
            request_timeout: Duration::from_secs(30),
            jitter: JitterWindow::default(),
            fallback_total: 20_000,
            max_pages: None,
        }
    }
}

impl Config {
    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.page_size > 0, "page_size must be positive");
        anyhow::ensure!(self.workers > 0, "workers must be positive");
        anyhow::ensure!(!self.endpoint.is_empty(), "endpoint must be set");
        anyhow::ensure!(!self.event.is_empty(), "event filter must be set");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn zero_page_size_rejected() {
        let config = Config {
            page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_workers_rejected() {
        let config = Config {
            workers: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_event_rejected() {
        let config = Config {
            event: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

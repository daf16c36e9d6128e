//! Randomized politeness pause before outbound requests.
//!
//! Remote sources with abuse defenses treat a burst of identically-timed
//! requests as a single automated client; a bounded random pause per worker
//! spreads them out. Fixed jitter only, no adaptive backoff.

use std::time::Duration;

/// Inclusive bounds for the random pre-request pause, in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct JitterWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl JitterWindow {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Draw a random duration within the window.
    pub fn sample(&self) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(fastrand::u64(self.min_ms..=self.max_ms))
    }

    /// Sleep the calling thread for a random duration within the window.
    pub fn pause(&self) {
        std::thread::sleep(self.sample());
    }
}

impl Default for JitterWindow {
    fn default() -> Self {
        Self {
            min_ms: 500,
            max_ms: 2000,
        }
    }
}

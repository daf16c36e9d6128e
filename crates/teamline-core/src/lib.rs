//! Teamline Core - Common infrastructure for harvest pipelines
//!
//! This crate provides the shared HTTP client, logging setup, and
//! politeness-pause helpers used by the source-specific crates.

pub mod http;
pub mod logging;
pub mod pause;

// Re-exports for convenience
pub use http::{HttpError, SHARED_RUNTIME, http_client, post_json};
pub use logging::init_logging;
pub use pause::JitterWindow;

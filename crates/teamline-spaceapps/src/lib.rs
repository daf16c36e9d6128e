//! Teamline Space Apps - harvester for the Space Apps Challenge teams API
//!
//! The source paginates with opaque forward cursors, but the cursor is
//! synthesizable from a logical offset (see [`cursor`]), which is what makes
//! fetching pages in parallel possible at all.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Mutex;
//! use teamline_spaceapps::{Config, fetch_total, run};
//! use teamline_store::Store;
//!
//! let config = Config::default();
//! let total = fetch_total(&config).unwrap_or(config.fallback_total);
//! let gate = Mutex::new(Store::open("teams.db").expect("open store"));
//! let summary = run(&config, &gate, total).expect("harvest failed");
//! println!("Inserted {} records", summary.records_inserted);
//! ```

pub mod api;
pub mod config;
pub mod cursor;
pub mod partition;
pub mod query;
pub mod runner;
pub mod schema;
pub mod transform;
pub mod worker;

// Re-exports for convenience
pub use api::{FetchError, fetch_total};
pub use config::Config;
pub use runner::{RunSummary, run};

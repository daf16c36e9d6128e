//! Teamline Store - SQLite persistence gate for harvested records
//!
//! Single writer discipline: the orchestrator wraps [`Store`] in a mutex
//! and holds it for the full duration of one batch. SQLite has no safe
//! concurrent-writer story, so batch-level exclusivity is the correctness
//! boundary here, not an optimization.

pub mod record;
pub mod store;

// Re-exports for convenience
pub use record::{ChallengeRow, HarvestedRecord, LocationRow};
pub use store::{BatchReport, Store};

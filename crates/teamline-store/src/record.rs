//! Normalized record shapes accepted by the store.

/// Parent row for the `locations` table. Present on a record only when the
/// source supplied a location id; first write wins, never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRow {
    pub id: String,
    /// Resolved display label ("City, Country" or whichever part exists).
    pub display_name: String,
    pub country: Option<String>,
}

/// Parent row for the `challenges` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
}

/// One normalized harvested unit, ready to persist.
///
/// `link` is the natural deduplication key: at most one stored record per
/// distinct link value, regardless of how often it is observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestedRecord {
    pub name: String,
    pub link: String,
    pub location: Option<LocationRow>,
    /// Required reference; a record without one is skipped by the store.
    pub challenge: Option<ChallengeRow>,
    pub badges: Option<String>,
}

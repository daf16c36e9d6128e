//! SQLite store with link-based deduplication and parent-first inserts.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, params};

use crate::record::HarvestedRecord;

/// Outcome of persisting one batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// New record rows inserted.
    pub inserted: usize,
    /// Records whose link already existed.
    pub duplicates: usize,
    /// Records dropped for lack of a challenge id (required reference).
    pub skipped: usize,
}

/// Exclusive-access SQLite store for harvested records.
///
/// Not internally synchronized; callers serialize access (the orchestrator
/// holds a mutex over the whole `persist` call).
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) a store at `path` and bootstrap the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open store: {}", path.display()))?;
        let store = Self { conn };
        store.bootstrap()?;
        Ok(store)
    }

    /// In-memory store, for tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory store")?;
        let store = Self { conn };
        store.bootstrap()?;
        Ok(store)
    }

    fn bootstrap(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS locations (
                    id TEXT PRIMARY KEY,
                    display_name TEXT,
                    country TEXT
                );
                CREATE TABLE IF NOT EXISTS challenges (
                    id TEXT PRIMARY KEY,
                    title TEXT,
                    description TEXT
                );
                CREATE TABLE IF NOT EXISTS records (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    location_id TEXT REFERENCES locations(id),
                    challenge_id TEXT NOT NULL REFERENCES challenges(id),
                    badges TEXT,
                    link TEXT NOT NULL
                );",
            )
            .context("failed to create schema")
    }

    /// Persist one batch as a single transaction.
    ///
    /// Per record: parents first (`INSERT OR IGNORE`, first write wins),
    /// then the record row unless its link is already stored. Any error
    /// rolls back the entire batch; no partial batch is ever visible.
    pub fn persist(&mut self, batch: &[HarvestedRecord]) -> Result<BatchReport> {
        let tx = self.conn.transaction().context("failed to begin batch")?;
        let mut report = BatchReport::default();

        for record in batch {
            if let Some(loc) = record.location.as_ref().filter(|l| !l.id.is_empty()) {
                tx.execute(
                    "INSERT OR IGNORE INTO locations (id, display_name, country)
                     VALUES (?1, ?2, ?3)",
                    params![loc.id, loc.display_name, loc.country],
                )
                .context("failed to insert location")?;
            }

            let Some(chal) = record.challenge.as_ref().filter(|c| !c.id.is_empty()) else {
                // challenge_id is NOT NULL; nothing to attach the record to
                log::debug!("skipping record without challenge id: {}", record.link);
                report.skipped += 1;
                continue;
            };
            tx.execute(
                "INSERT OR IGNORE INTO challenges (id, title, description)
                 VALUES (?1, ?2, ?3)",
                params![chal.id, chal.title, chal.description],
            )
            .context("failed to insert challenge")?;

            // Dedup gate: existence check per record, not a unique constraint,
            // so one duplicate never fails the rest of the batch.
            let location_id = record
                .location
                .as_ref()
                .filter(|l| !l.id.is_empty())
                .map(|l| l.id.as_str());
            let inserted = tx
                .execute(
                    "INSERT INTO records (name, location_id, challenge_id, badges, link)
                     SELECT ?1, ?2, ?3, ?4, ?5
                     WHERE NOT EXISTS (SELECT 1 FROM records WHERE link = ?5)",
                    params![record.name, location_id, chal.id, record.badges, record.link],
                )
                .context("failed to insert record")?;
            if inserted > 0 {
                report.inserted += 1;
            } else {
                report.duplicates += 1;
            }
        }

        tx.commit().context("failed to commit batch")?;
        Ok(report)
    }

    /// Number of stored records.
    pub fn record_count(&self) -> Result<usize> {
        self.count("records")
    }

    /// Number of stored locations.
    pub fn location_count(&self) -> Result<usize> {
        self.count("locations")
    }

    /// Number of stored challenges.
    pub fn challenge_count(&self) -> Result<usize> {
        self.count("challenges")
    }

    fn count(&self, table: &str) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
            .with_context(|| format!("failed to count {table}"))?;
        Ok(n as usize)
    }

    /// Whether a record with this link is already stored.
    pub fn link_exists(&self, link: &str) -> Result<bool> {
        let n: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM records WHERE link = ?1",
                params![link],
                |row| row.get(0),
            )
            .context("failed to check link")?;
        Ok(n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ChallengeRow, LocationRow};

    fn challenge(id: &str) -> ChallengeRow {
        ChallengeRow {
            id: id.to_string(),
            title: format!("Challenge {id}"),
            description: None,
        }
    }

    fn record(link: &str) -> HarvestedRecord {
        HarvestedRecord {
            name: "Team".to_string(),
            link: link.to_string(),
            location: None,
            challenge: Some(challenge("c1")),
            badges: None,
        }
    }

    #[test]
    fn persist_inserts_and_counts() {
        let mut store = Store::in_memory().unwrap();
        let report = store.persist(&[record("/t/a"), record("/t/b")]).unwrap();
        assert_eq!(report.inserted, 2);
        assert_eq!(report.duplicates, 0);
        assert_eq!(store.record_count().unwrap(), 2);
        assert_eq!(store.challenge_count().unwrap(), 1);
    }

    #[test]
    fn duplicate_link_is_skipped() {
        let mut store = Store::in_memory().unwrap();
        store.persist(&[record("/t/a")]).unwrap();
        let report = store.persist(&[record("/t/a")]).unwrap();
        assert_eq!(report.inserted, 0);
        assert_eq!(report.duplicates, 1);
        assert_eq!(store.record_count().unwrap(), 1);
    }

    #[test]
    fn duplicate_within_one_batch() {
        let mut store = Store::in_memory().unwrap();
        let report = store.persist(&[record("/t/a"), record("/t/a")]).unwrap();
        assert_eq!(report.inserted, 1);
        assert_eq!(report.duplicates, 1);
    }

    #[test]
    fn record_without_challenge_is_skipped() {
        let mut store = Store::in_memory().unwrap();
        let mut r = record("/t/a");
        r.challenge = None;
        let report = store.persist(&[r]).unwrap();
        assert_eq!(report.skipped, 1);
        assert_eq!(store.record_count().unwrap(), 0);
    }

    #[test]
    fn empty_challenge_id_is_skipped() {
        let mut store = Store::in_memory().unwrap();
        let mut r = record("/t/a");
        r.challenge = Some(challenge(""));
        let report = store.persist(&[r]).unwrap();
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn location_first_write_wins() {
        let mut store = Store::in_memory().unwrap();
        let mut first = record("/t/a");
        first.location = Some(LocationRow {
            id: "l1".to_string(),
            display_name: "Rome, Italy".to_string(),
            country: Some("Italy".to_string()),
        });
        let mut second = record("/t/b");
        second.location = Some(LocationRow {
            id: "l1".to_string(),
            display_name: "Roma".to_string(),
            country: None,
        });
        store.persist(&[first, second]).unwrap();

        assert_eq!(store.location_count().unwrap(), 1);
        let name: String = store
            .conn
            .query_row(
                "SELECT display_name FROM locations WHERE id = 'l1'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(name, "Rome, Italy");
    }

    #[test]
    fn parents_exist_for_every_record() {
        let mut store = Store::in_memory().unwrap();
        let mut r = record("/t/a");
        r.location = Some(LocationRow {
            id: "l1".to_string(),
            display_name: "Virtual / Global".to_string(),
            country: None,
        });
        store.persist(&[r]).unwrap();

        let orphans: i64 = store
            .conn
            .query_row(
                "SELECT COUNT(*) FROM records r
                 WHERE (r.location_id IS NOT NULL
                        AND NOT EXISTS (SELECT 1 FROM locations l WHERE l.id = r.location_id))
                    OR NOT EXISTS (SELECT 1 FROM challenges c WHERE c.id = r.challenge_id)",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[test]
    fn null_location_is_valid() {
        let mut store = Store::in_memory().unwrap();
        store.persist(&[record("/t/a")]).unwrap();
        let loc: Option<String> = store
            .conn
            .query_row("SELECT location_id FROM records", [], |row| row.get(0))
            .unwrap();
        assert_eq!(loc, None);
    }

    #[test]
    fn link_exists_after_insert() {
        let mut store = Store::in_memory().unwrap();
        assert!(!store.link_exists("/t/a").unwrap());
        store.persist(&[record("/t/a")]).unwrap();
        assert!(store.link_exists("/t/a").unwrap());
    }

    #[test]
    fn reopen_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teams.db");
        {
            let mut store = Store::open(&path).unwrap();
            store.persist(&[record("/t/a")]).unwrap();
        }
        let store = Store::open(&path).unwrap();
        assert_eq!(store.record_count().unwrap(), 1);
    }
}

//! Concurrency tests for the mutex-gated store.
//!
//! Exercises the single-writer discipline the orchestrator relies on:
//! many threads persisting batches with overlapping parent ids must leave
//! exactly one row per distinct parent and no lost records.

use std::sync::{Arc, Mutex};

use teamline_store::{ChallengeRow, HarvestedRecord, LocationRow, Store};

fn record(link: &str, location_id: &str, challenge_id: &str) -> HarvestedRecord {
    HarvestedRecord {
        name: format!("Team {link}"),
        link: link.to_string(),
        location: Some(LocationRow {
            id: location_id.to_string(),
            display_name: "Rome, Italy".to_string(),
            country: Some("Italy".to_string()),
        }),
        challenge: Some(ChallengeRow {
            id: challenge_id.to_string(),
            title: "Challenge".to_string(),
            description: None,
        }),
        badges: None,
    }
}

#[test]
fn overlapping_parents_across_threads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("teams.db");
    let gate = Arc::new(Mutex::new(Store::open(&path).unwrap()));

    // 8 threads, each writing 20 distinct links, all sharing 3 locations
    // and 3 challenges.
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let gate = Arc::clone(&gate);
            std::thread::spawn(move || {
                let batch: Vec<_> = (0..20)
                    .map(|i| {
                        record(
                            &format!("/t/{worker}-{i}"),
                            &format!("loc-{}", i % 3),
                            &format!("chal-{}", i % 3),
                        )
                    })
                    .collect();
                gate.lock().unwrap().persist(&batch).unwrap()
            })
        })
        .collect();

    let mut inserted = 0;
    for handle in handles {
        inserted += handle.join().unwrap().inserted;
    }

    let store = gate.lock().unwrap();
    assert_eq!(inserted, 160);
    assert_eq!(store.record_count().unwrap(), 160);
    assert_eq!(store.location_count().unwrap(), 3);
    assert_eq!(store.challenge_count().unwrap(), 3);
}

#[test]
fn overlapping_links_across_threads() {
    let gate = Arc::new(Mutex::new(Store::in_memory().unwrap()));

    // Every thread writes the same 10 links; dedup must keep exactly one
    // row per link no matter the interleaving.
    let handles: Vec<_> = (0..6)
        .map(|_| {
            let gate = Arc::clone(&gate);
            std::thread::spawn(move || {
                let batch: Vec<_> = (0..10)
                    .map(|i| record(&format!("/t/{i}"), "loc-0", "chal-0"))
                    .collect();
                gate.lock().unwrap().persist(&batch).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(gate.lock().unwrap().record_count().unwrap(), 10);
}

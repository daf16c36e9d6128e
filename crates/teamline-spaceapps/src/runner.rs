//! Harvest orchestration: partition, dispatch, aggregate.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use teamline_store::Store;

use crate::config::Config;
use crate::partition;
use crate::worker::harvest_page;

/// Mutable counters shared by workers through one mutex.
#[derive(Debug, Default)]
struct Tally {
    pages_fetched: usize,
    pages_failed: usize,
    batches_failed: usize,
    records_fetched: usize,
    records_inserted: usize,
    duplicates_skipped: usize,
    records_skipped: usize,
}

/// Run the harvest over `total` records.
///
/// Dispatches page offsets to `config.workers` parallel units; each unit
/// fetches one page, then persists it through the shared store gate. The
/// run completes when every unit has returned; fetch and persistence
/// failures are counted, never fatal.
pub fn run(config: &Config, gate: &Mutex<Store>, total: u64) -> anyhow::Result<RunSummary> {
    config.validate()?;
    let start = Instant::now();

    let mut offsets = partition::offsets(total, config.page_size);
    if let Some(max) = config.max_pages {
        offsets.truncate(max);
    }
    log::info!(
        "Harvesting ~{total} records: {} pages of {} with {} workers",
        offsets.len(),
        config.page_size,
        config.workers
    );

    let overall_pb = ProgressBar::new(offsets.len() as u64);
    overall_pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pages ({eta})",
        )
        .expect("invalid template")
        .progress_chars("=>-"),
    );

    // Atomic claim index: workers pull the next offset without coordination
    let next_idx = AtomicUsize::new(0);
    let tally = Mutex::new(Tally::default());

    rayon::scope(|s| {
        for _ in 0..config.workers {
            s.spawn(|_| {
                loop {
                    let idx = next_idx.fetch_add(1, Ordering::SeqCst);
                    let Some(&offset) = offsets.get(idx) else {
                        break;
                    };

                    match harvest_page(config, offset) {
                        Ok(records) => {
                            let persisted = if records.is_empty() {
                                None
                            } else {
                                // Batch-level exclusivity: hold the gate for
                                // the whole persist call.
                                Some(gate.lock().unwrap().persist(&records))
                            };

                            let mut t = tally.lock().unwrap();
                            t.pages_fetched += 1;
                            t.records_fetched += records.len();
                            match persisted {
                                Some(Ok(report)) => {
                                    t.records_inserted += report.inserted;
                                    t.duplicates_skipped += report.duplicates;
                                    t.records_skipped += report.skipped;
                                    log::debug!(
                                        "offset {offset}: {} fetched, {} inserted",
                                        records.len(),
                                        report.inserted
                                    );
                                }
                                Some(Err(e)) => {
                                    t.batches_failed += 1;
                                    log::error!("offset {offset}: batch rolled back: {e:#}");
                                }
                                None => log::debug!("offset {offset}: page exhausted"),
                            }
                        }
                        Err(e) => {
                            tally.lock().unwrap().pages_failed += 1;
                            log::warn!("offset {offset}: fetch failed: {e}");
                        }
                    }
                    overall_pb.inc(1);
                }
            });
        }
    });

    overall_pb.finish_and_clear();

    let tally = tally.into_inner().unwrap();
    let summary = RunSummary {
        pages_total: offsets.len(),
        pages_fetched: tally.pages_fetched,
        pages_failed: tally.pages_failed,
        batches_failed: tally.batches_failed,
        records_fetched: tally.records_fetched,
        records_inserted: tally.records_inserted,
        duplicates_skipped: tally.duplicates_skipped,
        records_skipped: tally.records_skipped,
        elapsed: start.elapsed(),
    };
    summary.log();
    Ok(summary)
}

/// Summary of one harvest run.
#[derive(Debug)]
pub struct RunSummary {
    pub pages_total: usize,
    pub pages_fetched: usize,
    pub pages_failed: usize,
    /// Batches rolled back on a store error (no partial batch visible).
    pub batches_failed: usize,
    pub records_fetched: usize,
    pub records_inserted: usize,
    pub duplicates_skipped: usize,
    /// Records dropped for lack of a challenge reference.
    pub records_skipped: usize,
    pub elapsed: std::time::Duration,
}

impl RunSummary {
    pub fn log(&self) {
        log::info!("=== Harvest Summary ===");
        log::info!(
            "Pages: {}/{} fetched ({} failed)",
            self.pages_fetched,
            self.pages_total,
            self.pages_failed
        );
        log::info!(
            "Records: {} inserted, {} duplicates, {} skipped (of {} fetched)",
            self.records_inserted,
            self.duplicates_skipped,
            self.records_skipped,
            self.records_fetched
        );
        if self.batches_failed > 0 {
            log::warn!("Batches rolled back: {}", self.batches_failed);
        }
        log::info!("Time: {:.1}s", self.elapsed.as_secs_f64());
        if self.records_inserted > 0 && !self.elapsed.is_zero() {
            let per_sec = self.records_inserted as f64 / self.elapsed.as_secs_f64();
            log::info!("Throughput: {per_sec:.0} records/sec");
        }
    }
}

//! Partitioning of the total record range into independent page offsets.

/// Produce the ordered page offsets covering `total` records.
///
/// Steps by `page_size` from 0, deliberately continuing one page past
/// `total` to tolerate an undercounted (stale) total; a trailing offset
/// past the real end just returns an empty page. Deterministic: identical
/// inputs always yield the identical sequence, so workers can claim
/// offsets without coordination.
pub fn offsets(total: u64, page_size: u64) -> Vec<u64> {
    assert!(page_size > 0, "page_size must be positive");
    (0..total + page_size)
        .step_by(page_size as usize)
        .collect()
}

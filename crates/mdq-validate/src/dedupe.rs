//! Identifier deduplication for the valid partition.

use std::collections::BTreeSet;

use tracing::debug;

use mdq_model::Record;

/// Result of deduplicating valid records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupOutcome {
    /// Surviving records in input order.
    pub records: Vec<Record>,
    /// Number of later duplicates removed.
    pub dropped: usize,
}

/// Keeps the first record for each identifier and drops the rest.
///
/// Records without an identifier are kept as they are; the validator never
/// lets them into the valid set.
pub fn dedupe_by_id(records: Vec<Record>) -> DedupOutcome {
    let mut seen = BTreeSet::new();
    let mut kept = Vec::with_capacity(records.len());
    let mut dropped = 0usize;
    for record in records {
        let Some(id) = record.identifier() else {
            kept.push(record);
            continue;
        };
        if seen.insert(id.to_string()) {
            kept.push(record);
        } else {
            debug!(row = record.row, "dropped duplicate id");
            dropped += 1;
        }
    }
    DedupOutcome {
        records: kept,
        dropped,
    }
}

//! Cleaning pipeline with explicit stages.
//!
//! The pipeline runs these stages in order:
//! 1. **Load**: read the input file and check the required columns
//! 2. **Normalize**: trim and coerce every field
//! 3. **Validate**: split records into valid and invalid sets
//! 4. **Deduplicate**: keep the first valid record per identifier
//! 5. **Report**: rank violated rules and render the report
//! 6. **Output**: write CSV files, the SQLite table and the report
//!
//! Any fatal error aborts the run; per-record problems only route records
//! to the invalid set.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace, warn};

use mdq_ingest::{LoadedBatch, load_records};
use mdq_model::{InvalidRecord, Partition, Record, RunOptions};
use mdq_output::{write_invalid_csv, write_report, write_table, write_valid_csv};
use mdq_report::{TOP_ERROR_LIMIT, render_report, top_error_frequencies};
use mdq_transform::normalize_records;
use mdq_validate::{dedupe_by_id, partition_records};

use crate::logging::redact_value;
use crate::types::RunResult;

/// Records after validation and deduplication.
#[derive(Debug, Clone, Default)]
pub struct CleanedBatch {
    pub rows_read: usize,
    pub valid: Vec<Record>,
    pub invalid: Vec<InvalidRecord>,
    pub duplicates_dropped: usize,
}

/// Runs every stage for one input file.
pub fn run_pipeline(options: &RunOptions) -> Result<RunResult> {
    let run_span = info_span!("run", input = %options.input.display(), dry_run = options.dry_run);
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let batch = info_span!("load").in_scope(|| load_stage(options))?;
    let cleaned = clean_batch(&batch);

    let report = render_report(cleaned.valid.len(), &cleaned.invalid);
    if options.dry_run {
        info!("dry run, no outputs written");
    } else {
        info_span!("output").in_scope(|| write_outputs(options, &cleaned, &report))?;
    }

    info!(
        rows = cleaned.rows_read,
        valid = cleaned.valid.len(),
        invalid = cleaned.invalid.len(),
        duplicates = cleaned.duplicates_dropped,
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        rows_read: cleaned.rows_read,
        valid_count: cleaned.valid.len(),
        invalid_count: cleaned.invalid.len(),
        duplicates_dropped: cleaned.duplicates_dropped,
        top_errors: top_error_frequencies(&cleaned.invalid, TOP_ERROR_LIMIT),
        database: options.database.clone(),
        table: options.table.clone(),
        report_path: options.report_md.clone(),
        report,
        dry_run: options.dry_run,
    })
}

fn load_stage(options: &RunOptions) -> Result<LoadedBatch> {
    let batch = load_records(&options.input)
        .with_context(|| format!("load {}", options.input.display()))?;
    info!(
        rows = batch.row_count(),
        columns = batch.column_count(),
        "loaded input"
    );
    let ignored = batch.ignored_columns();
    if !ignored.is_empty() {
        warn!(columns = %ignored.join(", "), "ignoring extra input columns");
    }
    Ok(batch)
}

/// Normalizes, validates and deduplicates a loaded batch.
pub fn clean_batch(batch: &LoadedBatch) -> CleanedBatch {
    let records = info_span!("normalize").in_scope(|| normalize_records(&batch.records));

    let Partition { valid, invalid } = info_span!("validate").in_scope(|| {
        let partition = partition_records(records);
        for rejected in &partition.invalid {
            trace_rejected(rejected);
        }
        info!(
            valid = partition.valid.len(),
            invalid = partition.invalid.len(),
            "validated records"
        );
        partition
    });

    let deduped = info_span!("dedupe").in_scope(|| dedupe_by_id(valid));
    if deduped.dropped > 0 {
        info!(dropped = deduped.dropped, "dropped duplicate ids");
    } else {
        debug!("no duplicate ids");
    }

    CleanedBatch {
        rows_read: batch.row_count(),
        valid: deduped.records,
        invalid,
        duplicates_dropped: deduped.dropped,
    }
}

fn trace_rejected(rejected: &InvalidRecord) {
    let record = &rejected.record;
    trace!(
        row = record.row,
        id = redact_value(record.id.as_deref().unwrap_or_default()),
        name = redact_value(record.name.as_deref().unwrap_or_default()),
        email = redact_value(record.email.as_deref().unwrap_or_default()),
        errors = %rejected.descriptor(),
        "rejected record values"
    );
}

fn write_outputs(options: &RunOptions, cleaned: &CleanedBatch, report: &str) -> Result<()> {
    write_valid_csv(&options.valid_csv, &cleaned.valid)
        .with_context(|| format!("write valid records to {}", options.valid_csv.display()))?;
    write_invalid_csv(&options.invalid_csv, &cleaned.invalid).with_context(|| {
        format!(
            "write rejected records to {}",
            options.invalid_csv.display()
        )
    })?;
    write_table(&options.database, &options.table, &cleaned.valid)
        .with_context(|| format!("write table {} in {}", options.table, options.database))?;
    write_report(&options.report_md, report)
        .with_context(|| format!("write report to {}", options.report_md.display()))?;
    Ok(())
}

//! Batch replay of transaction requests
//!
//! Orchestrates the replay pipeline by coordinating between the
//! RequestReader (CSV input), the TransactionEngine (rules) and
//! `csv_format::write_outcomes_csv` (CSV output).
//!
//! Malformed rows are logged and skipped. Fatal errors (missing input file,
//! unwritable output) end the replay.

use crate::config::OperatingFlags;
use crate::core::TransactionEngine;
use crate::io::csv_format::{write_outcomes_csv, OutcomeRecord};
use crate::io::request_reader::RequestReader;
use crate::types::BankError;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Totals reported at the end of a replay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplaySummary {
    /// Rows sent to the engine
    pub processed: usize,

    /// Malformed rows that were skipped
    pub skipped: usize,

    /// Engine daily volume after the last row
    pub daily_volume: Decimal,

    /// Engine daily transaction count after the last row
    pub transaction_count: u32,
}

/// Replay every request in `input_path` through a fresh engine
///
/// One output row is written per processed request, in input order.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or the output cannot be
/// written.
pub fn replay_file(
    input_path: &Path,
    flags: OperatingFlags,
    output: &mut dyn Write,
) -> Result<ReplaySummary, BankError> {
    let mut engine = TransactionEngine::with_flags(flags);
    let reader = RequestReader::new(input_path)?;

    let mut outcomes = Vec::new();
    let mut skipped = 0;

    for result in reader {
        match result {
            Ok(request) => {
                let status = engine.process_request(&request);
                outcomes.push(OutcomeRecord { request, status });
            }
            Err(e) => {
                warn!(error = %e, "skipping malformed row");
                skipped += 1;
            }
        }
    }

    write_outcomes_csv(&outcomes, output)?;

    let summary = ReplaySummary {
        processed: outcomes.len(),
        skipped,
        daily_volume: engine.daily_volume(),
        transaction_count: engine.transaction_count(),
    };

    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        daily_volume = %summary.daily_volume,
        transaction_count = summary.transaction_count,
        "replay finished"
    );

    Ok(summary)
}

//! CSV format handling for transaction requests and replay output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to transaction requests
//! - Outcome serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{BankError, TransactionRequest, TransactionStatus, TransactionType};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, amount, source, destination.
/// Account columns may be left empty (deposits usually have no destination).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub tx_type: String,
    pub amount: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
}

/// A processed request and the status it resolved to
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeRecord {
    pub request: TransactionRequest,
    pub status: TransactionStatus,
}

/// Convert a CsvRecord to a TransactionRequest
///
/// Unrecognised type names become [`TransactionType::Unknown`] rather than an
/// error so that the engine decides their outcome.
///
/// # Errors
///
/// Returns `ParseError` if the amount is missing or not a decimal number.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<TransactionRequest, BankError> {
    let tx_type = TransactionType::parse(&csv_record.tx_type);

    let amount = match csv_record.amount.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => {
            Decimal::from_str(text).map_err(|_| BankError::ParseError {
                line: None,
                message: format!("Invalid amount '{}' for {} request", text, tx_type),
            })?
        }
        _ => {
            return Err(BankError::ParseError {
                line: None,
                message: format!("{} request requires an amount", tx_type),
            })
        }
    };

    Ok(TransactionRequest {
        tx_type,
        amount,
        source: csv_record.source.unwrap_or_default(),
        destination: csv_record.destination.unwrap_or_default(),
    })
}

/// Write replay outcomes as CSV, one row per processed request in order
///
/// Columns: type, amount, source, destination, status
pub fn write_outcomes_csv(
    outcomes: &[OutcomeRecord],
    output: &mut dyn Write,
) -> Result<(), BankError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["type", "amount", "source", "destination", "status"])?;

    for outcome in outcomes {
        let request = &outcome.request;
        writer.write_record([
            request.tx_type.to_string(),
            request.amount.to_string(),
            request.source.clone(),
            request.destination.clone(),
            outcome.status.to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

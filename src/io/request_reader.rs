//! Streaming reader for transaction request files
//!
//! Provides an iterator over transaction requests from a CSV file. Format
//! concerns are delegated to the csv_format module.
//!
//! ```no_run
//! use banking_rules_engine::io::RequestReader;
//! use std::path::Path;
//!
//! let reader = RequestReader::new(Path::new("requests.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(request) => println!("{} {}", request.tx_type, request.amount),
//!         Err(e) => eprintln!("skipped: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Malformed rows are yielded as `ParseError` items carrying their line number
//!   so the caller can skip them and carry on

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{BankError, TransactionRequest};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug)]
pub struct RequestReader {
    reader: csv::Reader<File>,

    /// Data rows consumed so far (the header is line 1)
    line_num: u64,
}

impl RequestReader {
    /// Open a request file for streaming
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if the path does not exist
    /// - `IoError` for any other open failure
    pub fn new(path: &Path) -> Result<Self, BankError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BankError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => BankError::from(e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for RequestReader {
    type Item = Result<TransactionRequest, BankError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let row = deserializer.next()?;

        self.line_num += 1;
        let line = self.line_num + 1;

        let result = row
            .map_err(|e| BankError::ParseError {
                line: Some(line),
                message: e.to_string(),
            })
            .and_then(convert_csv_record)
            .map_err(|e| match e {
                BankError::ParseError { message, .. } => BankError::ParseError {
                    line: Some(line),
                    message,
                },
                other => other,
            });

        Some(result)
    }
}

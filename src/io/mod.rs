//! I/O module
//!
//! Handles CSV parsing and output for request replay.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, outcome serialization)
//! - `request_reader` - Streaming CSV reader with iterator interface

pub mod csv_format;
pub mod request_reader;

pub use csv_format::{convert_csv_record, write_outcomes_csv, CsvRecord, OutcomeRecord};
pub use request_reader::RequestReader;

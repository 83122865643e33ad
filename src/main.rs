//! Banking rules replay CLI
//!
//! Replays transaction requests from a CSV file through the transaction
//! engine and writes each request's outcome to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- requests.csv > outcomes.csv
//! cargo run -- --system-locked requests.csv > outcomes.csv
//! RUST_LOG=debug cargo run -- requests.csv > outcomes.csv
//! ```
//!
//! Logs go to stderr so they never mix with the CSV output.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use banking_rules_engine::cli;
use banking_rules_engine::replay;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut output = std::io::stdout();
    if let Err(e) = replay::replay_file(&args.input_file, args.operating_flags(), &mut output) {
        tracing::error!(error = %e, "replay failed");
        process::exit(1);
    }
}

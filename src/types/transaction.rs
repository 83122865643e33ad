//! Transaction-related types for the banking rules engine
//!
//! This module defines transaction types, outcome statuses, the journal record
//! and the request shape used by the replay pipeline.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Transaction identifier
///
/// Monotonically increasing and never reused, even across daily resets.
pub type TransactionId = u32;

/// Transaction types understood by the engine
///
/// `Unknown` stands in for any type value the engine does not recognise.
/// Such requests pass amount validation but are always cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Credit funds. Counts towards the daily volume.
    Deposit,

    /// Debit funds. Limited to 50,000 per transaction and counts towards
    /// the daily volume.
    Withdrawal,

    /// Move funds between two distinct accounts
    Transfer,

    /// Return funds. Limited to 10,000 per transaction.
    Refund,

    /// Unrecognised type value
    Unknown,
}

impl TransactionType {
    /// Parse a type name, ignoring case and surrounding whitespace
    ///
    /// Unrecognised names map to [`TransactionType::Unknown`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "deposit" => TransactionType::Deposit,
            "withdrawal" => TransactionType::Withdrawal,
            "transfer" => TransactionType::Transfer,
            "refund" => TransactionType::Refund,
            _ => TransactionType::Unknown,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Transfer => "transfer",
            TransactionType::Refund => "refund",
            TransactionType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Outcome of processing a transaction
///
/// Only `Completed`, `Approved` and `Pending` outcomes are journaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Cancelled,
}

impl TransactionStatus {
    /// Whether a transaction with this outcome is appended to the journal
    pub fn is_accepted(self) -> bool {
        !matches!(
            self,
            TransactionStatus::Rejected | TransactionStatus::Cancelled
        )
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Approved => "APPROVED",
            TransactionStatus::Rejected => "REJECTED",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}

/// Journal entry for an accepted transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,

    pub tx_type: TransactionType,

    /// Amount exactly as supplied by the caller
    pub amount: Decimal,

    /// Opaque source account identifier, not checked against any store
    pub source_account: String,

    /// Opaque destination account identifier, may be empty
    pub dest_account: String,

    /// Wall-clock time at which the entry was journaled
    pub timestamp: DateTime<Utc>,

    /// Outcome recorded at journaling time
    pub status: TransactionStatus,
}

/// A transaction request read from the replay input
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub tx_type: TransactionType,
    pub amount: Decimal,
    pub source: String,
    pub destination: String,
}

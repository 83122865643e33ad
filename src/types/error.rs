//! Error types for the banking rules engine
//!
//! This module defines every failure an account or transaction rule can
//! report, plus the I/O and parsing failures of the replay pipeline.
//!
//! # Error Categories
//!
//! - **Not found**: unknown account identifier
//! - **Lifecycle rules**: creation limits and status transitions
//! - **Validation**: transaction amount limits
//! - **File I/O and CSV parsing**: replay input and output

use crate::types::{AccountStatus, TransactionType};
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the banking rules engine
///
/// None of these are fatal to the component that reports them. The store and
/// engine leave their state untouched on error unless a variant says
/// otherwise.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable during replay: the malformed row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown account identifier
    #[error("Account {account} not found")]
    AccountNotFound { account: String },

    /// Initial balance below the minimum required to open an account
    #[error("Initial balance {balance} is below the minimum of {minimum}")]
    BelowMinimumBalance { balance: Decimal, minimum: Decimal },

    /// The store already holds the maximum number of accounts
    #[error("Account limit of {limit} reached")]
    AccountLimitReached { limit: usize },

    /// The account is closed and no longer accepts transitions
    #[error("Account {account} is closed")]
    AccountClosed { account: String },

    /// The account is frozen and cannot be activated directly
    #[error("Account {account} is frozen")]
    AccountFrozen { account: String },

    /// The account has not been verified
    #[error("Account {account} is not verified")]
    NotVerified { account: String },

    /// The account carries a fraud alert
    #[error("Account {account} has an active fraud alert")]
    FraudAlert { account: String },

    /// The account still holds funds and cannot be closed
    #[error("Account {account} has an outstanding balance of {balance}")]
    OutstandingBalance { account: String, balance: Decimal },

    /// An active account's risk score is too low to suspend it
    #[error("Account {account} risk score {risk_score} is below the suspension threshold of {threshold}")]
    RiskBelowThreshold {
        account: String,
        risk_score: i32,
        threshold: i32,
    },

    /// Verification was reported as failed
    #[error("Verification failed for account {account}")]
    VerificationFailed { account: String },

    /// Verification succeeded but the account was not awaiting it
    #[error("Account {account} is {status}, not pending verification")]
    NotPendingVerification {
        account: String,
        status: AccountStatus,
    },

    /// Amount below the minimum transaction amount
    #[error("Amount {amount} is below the minimum of {minimum}")]
    AmountBelowMinimum { amount: Decimal, minimum: Decimal },

    /// Amount above the limit for this transaction type
    #[error("Amount {amount} exceeds the {tx_type} limit of {limit}")]
    AmountAboveLimit {
        amount: Decimal,
        limit: Decimal,
        tx_type: TransactionType,
    },
}

// Conversion from io::Error to BankError
impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to BankError
impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        BankError::AccountNotFound {
            account: account.to_string(),
        }
    }

    /// Create an AccountClosed error
    pub fn account_closed(account: &str) -> Self {
        BankError::AccountClosed {
            account: account.to_string(),
        }
    }

    /// Create an AccountFrozen error
    pub fn account_frozen(account: &str) -> Self {
        BankError::AccountFrozen {
            account: account.to_string(),
        }
    }

    /// Create a NotVerified error
    pub fn not_verified(account: &str) -> Self {
        BankError::NotVerified {
            account: account.to_string(),
        }
    }

    /// Create a FraudAlert error
    pub fn fraud_alert(account: &str) -> Self {
        BankError::FraudAlert {
            account: account.to_string(),
        }
    }

    /// Create an OutstandingBalance error
    pub fn outstanding_balance(account: &str, balance: Decimal) -> Self {
        BankError::OutstandingBalance {
            account: account.to_string(),
            balance,
        }
    }

    /// Create a RiskBelowThreshold error
    pub fn risk_below_threshold(account: &str, risk_score: i32, threshold: i32) -> Self {
        BankError::RiskBelowThreshold {
            account: account.to_string(),
            risk_score,
            threshold,
        }
    }

    /// Create a VerificationFailed error
    pub fn verification_failed(account: &str) -> Self {
        BankError::VerificationFailed {
            account: account.to_string(),
        }
    }

    /// Create a NotPendingVerification error
    pub fn not_pending_verification(account: &str, status: AccountStatus) -> Self {
        BankError::NotPendingVerification {
            account: account.to_string(),
            status,
        }
    }

    /// Create an AmountAboveLimit error
    pub fn amount_above_limit(amount: Decimal, limit: Decimal, tx_type: TransactionType) -> Self {
        BankError::AmountAboveLimit {
            amount,
            limit,
            tx_type,
        }
    }
}

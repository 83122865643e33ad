//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account record, type and status
//! - `transaction`: Transaction types, statuses and journal records
//! - `error`: Error types for the rules engine

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountId, AccountStatus, AccountType};
pub use error::BankError;
pub use transaction::{
    Transaction, TransactionId, TransactionRequest, TransactionStatus, TransactionType,
};

//! Banking Rules Engine Library
//! # Overview
//!
//! This library provides the business rules of a small banking core: an
//! account lifecycle state machine and a transaction processor with amount
//! validation, transfer rules and daily limits.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, BankError, etc.)
//! - [`config`] - Rule limits and runtime operating flags
//! - [`core`] - Business logic components:
//!   - [`core::account_store`] - Account creation and status transitions
//!   - [`core::risk`] - Risk scoring bands
//!   - [`core::engine`] - Transaction validation and dispatch
//!   - [`core::transaction_journal`] - History of accepted transactions
//!   - [`core::traits`] - Optional collaborator services
//! - [`io`] - CSV request parsing and outcome output
//! - [`replay`] - Batch replay of a request file
//! - [`cli`] - CLI arguments parsing
//!
//! # Account States
//!
//! - **PendingVerification**: newly created, awaiting verification
//! - **Active**: verified and in good standing
//! - **Suspended**: temporarily disabled, reversible
//! - **Frozen**: locked by risk evaluation under compliance audit
//! - **Closed**: terminal
//!
//! # Transaction Outcomes
//!
//! `Completed`, `Approved` and `Pending` outcomes are journaled and count
//! against the daily limit. `Rejected` and `Cancelled` outcomes leave no
//! trace.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod replay;
pub mod types;

pub use config::OperatingFlags;
pub use self::core::{AccountStore, TransactionEngine, TransactionJournal};
pub use replay::{replay_file, ReplaySummary};
pub use types::{
    Account, AccountId, AccountStatus, AccountType, BankError, Transaction, TransactionId,
    TransactionRequest, TransactionStatus, TransactionType,
};

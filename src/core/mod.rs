//! Core business logic module
//!
//! This module contains the account and transaction rule components:
//! - `traits` - Collaborator service abstractions
//! - `account_store` - Account lifecycle state machine
//! - `risk` - Risk scoring bands
//! - `engine` - Transaction validation, transfer rules and dispatch
//! - `transaction_journal` - Append-only history of accepted transactions

pub mod account_store;
pub mod engine;
pub mod risk;
pub mod traits;
pub mod transaction_journal;

#[cfg(test)]
pub(crate) mod test_support;

pub use account_store::{AccountStore, AccountStoreStats};
pub use engine::{EngineStats, TransactionEngine};
pub use risk::compute_risk_score;
pub use traits::{
    AuditLoggingService, AuthenticationService, ComplianceLevel, ComplianceService,
    ExternalDataService, NotificationService, ServiceSlot, VerificationResult,
};
pub use transaction_journal::TransactionJournal;

//! Collaborator traits for external services
//!
//! The account store and transaction engine call out to these services for
//! side effects and, in the compliance case, for a decision input. Every slot
//! is optional: an absent collaborator means the call is skipped, never that
//! the operation fails. Return values report collaborator failure but are
//! never retried.

use chrono::{DateTime, Utc};
use std::rc::Rc;

/// Optional, shared collaborator handle
///
/// Collaborators are owned by the caller; the core only keeps a reference.
pub type ServiceSlot<T> = Option<Rc<T>>;

/// Outcome of a multi-factor verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationResult {
    Success,
    Failed,
    Pending,
    Timeout,
    NetworkError,
}

/// Compliance classification of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceLevel {
    LowRisk,
    MediumRisk,
    HighRisk,
    /// Account may not transact at all
    Blocked,
}

/// Credential and multi-factor checks
///
/// Reserved slot on the account store; no current rule calls it.
pub trait AuthenticationService {
    fn validate_credentials(&self, username: &str, password: &str) -> bool;

    fn enable_multi_factor(&self, account: &str) -> bool;

    fn verify_multi_factor_token(&self, account: &str, token: &str) -> VerificationResult;

    fn lock_account(&self, account: &str) -> bool;
}

/// Outbound customer notifications
pub trait NotificationService {
    fn send_email(&self, email: &str, subject: &str, body: &str) -> bool;

    fn send_sms(&self, phone_number: &str, message: &str) -> bool;

    fn send_push(&self, device_token: &str, title: &str, message: &str) -> bool;

    fn subscribe(&self, account: &str, notification_type: &str) -> bool;
}

/// Third-party data lookups
///
/// Results are only logged; no rule folds them into a decision.
pub trait ExternalDataService {
    fn credit_score(&self, account: &str) -> String;

    fn identity_verification_status(&self, account: &str) -> String;

    fn validate_bank_account(&self, bank_account: &str, routing_number: &str) -> bool;

    fn linked_accounts(&self, primary_account: &str) -> Vec<String>;
}

/// Compliance screening
pub trait ComplianceService {
    /// Compliance level of the source account, consulted before dispatch
    fn compliance_level(&self, account: &str) -> ComplianceLevel;

    fn report_suspicious_activity(&self, account: &str, description: &str) -> bool;

    fn blacklist(&self) -> Vec<String>;

    fn is_blacklisted(&self, account: &str) -> bool;
}

/// Audit trail sink
pub trait AuditLoggingService {
    fn log_transaction(&self, account: &str, details: &str, timestamp: DateTime<Utc>) -> bool;

    fn log_account_event(&self, account: &str, event_type: &str, details: &str) -> bool;

    fn audit_trail(&self, account: &str) -> Vec<String>;

    fn archive_audit_logs(&self, archive_date: &str) -> bool;
}

//! Shared collaborators for integration tests

#![allow(dead_code)]

use banking_rules_engine::core::{
    AuditLoggingService, ComplianceLevel, ComplianceService, ExternalDataService,
    NotificationService,
};
use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};

/// Notification sink remembering every email subject it was asked to send
#[derive(Default)]
pub struct RecordingNotifications {
    pub emails: RefCell<Vec<(String, String)>>,
}

impl NotificationService for RecordingNotifications {
    fn send_email(&self, email: &str, subject: &str, _body: &str) -> bool {
        self.emails
            .borrow_mut()
            .push((email.to_string(), subject.to_string()));
        true
    }

    fn send_sms(&self, _phone_number: &str, _message: &str) -> bool {
        true
    }

    fn send_push(&self, _device_token: &str, _title: &str, _message: &str) -> bool {
        true
    }

    fn subscribe(&self, _account: &str, _notification_type: &str) -> bool {
        true
    }
}

/// Data service counting lookups
#[derive(Default)]
pub struct CountingDataService {
    pub lookups: Cell<usize>,
}

impl ExternalDataService for CountingDataService {
    fn credit_score(&self, _account: &str) -> String {
        self.lookups.set(self.lookups.get() + 1);
        "700".to_string()
    }

    fn identity_verification_status(&self, _account: &str) -> String {
        self.lookups.set(self.lookups.get() + 1);
        "VERIFIED".to_string()
    }

    fn validate_bank_account(&self, _bank_account: &str, _routing_number: &str) -> bool {
        true
    }

    fn linked_accounts(&self, _primary_account: &str) -> Vec<String> {
        self.lookups.set(self.lookups.get() + 1);
        Vec::new()
    }
}

/// Compliance service answering a fixed level for every account
pub struct FixedCompliance(pub ComplianceLevel);

impl ComplianceService for FixedCompliance {
    fn compliance_level(&self, _account: &str) -> ComplianceLevel {
        self.0
    }

    fn report_suspicious_activity(&self, _account: &str, _description: &str) -> bool {
        true
    }

    fn blacklist(&self) -> Vec<String> {
        Vec::new()
    }

    fn is_blacklisted(&self, _account: &str) -> bool {
        self.0 == ComplianceLevel::Blocked
    }
}

/// Audit sink keeping every account event
#[derive(Default)]
pub struct RecordingAudit {
    pub transactions: RefCell<Vec<(String, String)>>,
    pub events: RefCell<Vec<(String, String, String)>>,
}

impl AuditLoggingService for RecordingAudit {
    fn log_transaction(&self, account: &str, details: &str, _timestamp: DateTime<Utc>) -> bool {
        self.transactions
            .borrow_mut()
            .push((account.to_string(), details.to_string()));
        true
    }

    fn log_account_event(&self, account: &str, event_type: &str, details: &str) -> bool {
        self.events.borrow_mut().push((
            account.to_string(),
            event_type.to_string(),
            details.to_string(),
        ));
        true
    }

    fn audit_trail(&self, _account: &str) -> Vec<String> {
        Vec::new()
    }

    fn archive_audit_logs(&self, _archive_date: &str) -> bool {
        true
    }
}

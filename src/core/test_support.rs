//! Recording collaborators for unit tests
//!
//! Each mock records the calls it receives as `name(args)` strings and
//! answers with configurable canned values.

use crate::core::traits::{
    AuditLoggingService, AuthenticationService, ComplianceLevel, ComplianceService,
    ExternalDataService, NotificationService, VerificationResult,
};
use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};

#[derive(Default)]
pub struct CallLog {
    calls: RefCell<Vec<String>>,
}

impl CallLog {
    pub fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }
}

#[derive(Default)]
pub struct MockAuthentication {
    pub log: CallLog,
}

impl AuthenticationService for MockAuthentication {
    fn validate_credentials(&self, username: &str, _password: &str) -> bool {
        self.log.record(format!("validate_credentials({username})"));
        true
    }

    fn enable_multi_factor(&self, account: &str) -> bool {
        self.log.record(format!("enable_multi_factor({account})"));
        true
    }

    fn verify_multi_factor_token(&self, account: &str, _token: &str) -> VerificationResult {
        self.log.record(format!("verify_multi_factor_token({account})"));
        VerificationResult::Success
    }

    fn lock_account(&self, account: &str) -> bool {
        self.log.record(format!("lock_account({account})"));
        true
    }
}

#[derive(Default)]
pub struct MockNotification {
    pub log: CallLog,
}

impl NotificationService for MockNotification {
    fn send_email(&self, email: &str, subject: &str, _body: &str) -> bool {
        self.log.record(format!("send_email({email}, {subject})"));
        true
    }

    fn send_sms(&self, phone_number: &str, _message: &str) -> bool {
        self.log.record(format!("send_sms({phone_number})"));
        true
    }

    fn send_push(&self, device_token: &str, _title: &str, _message: &str) -> bool {
        self.log.record(format!("send_push({device_token})"));
        true
    }

    fn subscribe(&self, account: &str, notification_type: &str) -> bool {
        self.log
            .record(format!("subscribe({account}, {notification_type})"));
        true
    }
}

#[derive(Default)]
pub struct MockExternalData {
    pub log: CallLog,
}

impl ExternalDataService for MockExternalData {
    fn credit_score(&self, account: &str) -> String {
        self.log.record(format!("credit_score({account})"));
        "720".to_string()
    }

    fn identity_verification_status(&self, account: &str) -> String {
        self.log
            .record(format!("identity_verification_status({account})"));
        "VERIFIED".to_string()
    }

    fn validate_bank_account(&self, bank_account: &str, _routing_number: &str) -> bool {
        self.log
            .record(format!("validate_bank_account({bank_account})"));
        true
    }

    fn linked_accounts(&self, primary_account: &str) -> Vec<String> {
        self.log
            .record(format!("linked_accounts({primary_account})"));
        vec!["L1".to_string(), "L2".to_string()]
    }
}

pub struct MockCompliance {
    pub log: CallLog,
    pub level: Cell<ComplianceLevel>,
}

impl MockCompliance {
    pub fn with_level(level: ComplianceLevel) -> Self {
        MockCompliance {
            log: CallLog::default(),
            level: Cell::new(level),
        }
    }
}

impl ComplianceService for MockCompliance {
    fn compliance_level(&self, account: &str) -> ComplianceLevel {
        self.log.record(format!("compliance_level({account})"));
        self.level.get()
    }

    fn report_suspicious_activity(&self, account: &str, _description: &str) -> bool {
        self.log
            .record(format!("report_suspicious_activity({account})"));
        true
    }

    fn blacklist(&self) -> Vec<String> {
        self.log.record("blacklist()".to_string());
        Vec::new()
    }

    fn is_blacklisted(&self, account: &str) -> bool {
        self.log.record(format!("is_blacklisted({account})"));
        false
    }
}

#[derive(Default)]
pub struct MockAudit {
    pub log: CallLog,
}

impl AuditLoggingService for MockAudit {
    fn log_transaction(&self, account: &str, details: &str, _timestamp: DateTime<Utc>) -> bool {
        self.log
            .record(format!("log_transaction({account}, {details})"));
        true
    }

    fn log_account_event(&self, account: &str, event_type: &str, details: &str) -> bool {
        self.log.record(format!(
            "log_account_event({account}, {event_type}, {details})"
        ));
        true
    }

    fn audit_trail(&self, account: &str) -> Vec<String> {
        self.log.record(format!("audit_trail({account})"));
        Vec::new()
    }

    fn archive_audit_logs(&self, archive_date: &str) -> bool {
        self.log
            .record(format!("archive_audit_logs({archive_date})"));
        true
    }
}

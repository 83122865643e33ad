//! Transaction processing engine
//!
//! This module provides the TransactionEngine that validates transaction
//! requests, applies the per-type and transfer rules, and journals every
//! accepted outcome.
//!
//! The engine enforces business rules such as:
//! - Amount limits per transaction type
//! - Compliance screening of the source account (when a service is attached)
//! - Daily transaction count and volume caps
//! - The process-wide lock that holds non-urgent transfers

use crate::config::{
    OperatingFlags, MAX_DAILY_TRANSACTIONS, MAX_DAILY_VOLUME, MAX_REFUND_AMOUNT,
    MAX_TRANSACTION_AMOUNT, MAX_WITHDRAWAL_AMOUNT, MIN_TRANSACTION_AMOUNT,
    URGENT_TRANSFER_THRESHOLD,
};
use crate::core::traits::{AuditLoggingService, ComplianceLevel, ComplianceService, ServiceSlot};
use crate::core::transaction_journal::TransactionJournal;
use crate::types::{BankError, TransactionRequest, TransactionStatus, TransactionType};
use chrono::Utc;
use rust_decimal::Decimal;
use std::rc::Rc;
use tracing::{debug, info};

/// Amount above which a high-risk source account is refused
const HIGH_RISK_AMOUNT_LIMIT: Decimal = MAX_WITHDRAWAL_AMOUNT;

const TRANSACTION_PROCESSED_EVENT: &str = "TRANSACTION_PROCESSED";

/// Lifetime counters, unaffected by daily resets
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineStats {
    /// Number of journal appends since the engine was created
    pub transactions_processed: u64,

    /// Sum of completed deposit amounts since the engine was created
    pub volume_processed: Decimal,
}

/// Transaction processing engine
///
/// Owns the transaction journal and the rolling daily counters. The daily
/// count always equals the number of journal entries appended since the last
/// reset.
pub struct TransactionEngine {
    journal: TransactionJournal,
    daily_volume: Decimal,
    daily_count: u32,
    stats: EngineStats,
    flags: OperatingFlags,
    compliance_service: ServiceSlot<dyn ComplianceService>,
    audit_service: ServiceSlot<dyn AuditLoggingService>,
}

impl TransactionEngine {
    /// Create a new TransactionEngine with default operating flags
    pub fn new() -> Self {
        Self::with_flags(OperatingFlags::default())
    }

    /// Create a new TransactionEngine with the given operating flags
    pub fn with_flags(flags: OperatingFlags) -> Self {
        TransactionEngine {
            journal: TransactionJournal::new(),
            daily_volume: Decimal::ZERO,
            daily_count: 0,
            stats: EngineStats::default(),
            flags,
            compliance_service: None,
            audit_service: None,
        }
    }

    pub fn flags(&self) -> OperatingFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: OperatingFlags) {
        self.flags = flags;
    }

    pub fn set_compliance_service(&mut self, service: Option<Rc<dyn ComplianceService>>) {
        self.compliance_service = service;
    }

    pub fn set_audit_logging_service(&mut self, service: Option<Rc<dyn AuditLoggingService>>) {
        self.audit_service = service;
    }

    /// Check an amount against the limits for its transaction type
    ///
    /// # Errors
    ///
    /// - `AmountBelowMinimum` under 0.01
    /// - `AmountAboveLimit` above 1,000,000, or above the withdrawal
    ///   (50,000) or refund (10,000) limits for those types
    pub fn validate_transaction(
        &self,
        amount: Decimal,
        tx_type: TransactionType,
    ) -> Result<(), BankError> {
        if amount < MIN_TRANSACTION_AMOUNT {
            return Err(BankError::AmountBelowMinimum {
                amount,
                minimum: MIN_TRANSACTION_AMOUNT,
            });
        }

        if amount > MAX_TRANSACTION_AMOUNT {
            return Err(BankError::amount_above_limit(
                amount,
                MAX_TRANSACTION_AMOUNT,
                tx_type,
            ));
        }

        let type_limit = match tx_type {
            TransactionType::Withdrawal => Some(MAX_WITHDRAWAL_AMOUNT),
            TransactionType::Refund => Some(MAX_REFUND_AMOUNT),
            _ => None,
        };

        match type_limit {
            Some(limit) if amount > limit => {
                Err(BankError::amount_above_limit(amount, limit, tx_type))
            }
            _ => Ok(()),
        }
    }

    /// Decide the outcome of a transfer
    ///
    /// Urgent transfers above 100,000 are pre-screened against the daily caps.
    /// While the system is locked, urgent transfers are only approved and all
    /// others are held as pending. Transfers are never journaled here.
    pub fn execute_transfer(
        &self,
        amount: Decimal,
        source: &str,
        destination: &str,
        is_urgent: bool,
    ) -> TransactionStatus {
        if source.is_empty() || destination.is_empty() {
            return TransactionStatus::Rejected;
        }

        if source == destination {
            return if amount > Decimal::ZERO {
                TransactionStatus::Rejected
            } else {
                TransactionStatus::Cancelled
            };
        }

        if is_urgent && amount > URGENT_TRANSFER_THRESHOLD {
            if self.daily_count >= MAX_DAILY_TRANSACTIONS {
                return TransactionStatus::Rejected;
            }
            if self.daily_volume + amount > MAX_DAILY_VOLUME {
                return TransactionStatus::Rejected;
            }
        }

        if self.flags.system_locked {
            return if is_urgent {
                TransactionStatus::Approved
            } else {
                TransactionStatus::Pending
            };
        }

        let below_count_cap = self.daily_count < MAX_DAILY_TRANSACTIONS;

        if amount <= Decimal::ZERO {
            TransactionStatus::Cancelled
        } else if below_count_cap && self.daily_volume + amount <= MAX_DAILY_VOLUME {
            TransactionStatus::Completed
        } else if below_count_cap {
            TransactionStatus::Approved
        } else {
            TransactionStatus::Pending
        }
    }

    /// Validate, screen, dispatch and journal a single transaction
    ///
    /// Accepted outcomes are appended to the journal, counted against the
    /// daily cap and reported to the audit service. Rejected and cancelled
    /// outcomes change nothing.
    pub fn process_transaction(
        &mut self,
        tx_type: TransactionType,
        amount: Decimal,
        source: &str,
        destination: &str,
    ) -> TransactionStatus {
        if let Err(e) = self.validate_transaction(amount, tx_type) {
            debug!(%tx_type, %amount, error = %e, "transaction failed validation");
            return TransactionStatus::Rejected;
        }

        if let Some(compliance) = &self.compliance_service {
            match compliance.compliance_level(source) {
                ComplianceLevel::Blocked => {
                    debug!(%tx_type, source, "source account blocked by compliance");
                    return TransactionStatus::Rejected;
                }
                ComplianceLevel::HighRisk if amount > HIGH_RISK_AMOUNT_LIMIT => {
                    debug!(%tx_type, source, %amount, "high risk source over limit");
                    return TransactionStatus::Rejected;
                }
                _ => {}
            }
        }

        let status = match tx_type {
            TransactionType::Transfer => self.execute_transfer(amount, source, destination, false),
            TransactionType::Deposit => self.process_deposit(amount),
            TransactionType::Withdrawal => self.process_withdrawal(amount),
            TransactionType::Refund => self.resolve_refund(amount),
            TransactionType::Unknown => TransactionStatus::Cancelled,
        };

        if status.is_accepted() {
            self.record(tx_type, amount, source, destination, status);
        }

        status
    }

    /// Convenience wrapper for a parsed request
    pub fn process_request(&mut self, request: &TransactionRequest) -> TransactionStatus {
        self.process_transaction(
            request.tx_type,
            request.amount,
            &request.source,
            &request.destination,
        )
    }

    fn process_deposit(&mut self, amount: Decimal) -> TransactionStatus {
        if amount > Decimal::ZERO && self.daily_count < MAX_DAILY_TRANSACTIONS {
            self.daily_volume += amount;
            self.stats.volume_processed += amount;
            TransactionStatus::Completed
        } else {
            TransactionStatus::Rejected
        }
    }

    // The pending branch is unreachable through process_transaction while
    // validation caps withdrawals at the same limit.
    fn process_withdrawal(&mut self, amount: Decimal) -> TransactionStatus {
        if amount > Decimal::ZERO
            && amount <= MAX_WITHDRAWAL_AMOUNT
            && self.daily_count < MAX_DAILY_TRANSACTIONS
        {
            self.daily_volume += amount;
            TransactionStatus::Completed
        } else if self.daily_count >= MAX_DAILY_TRANSACTIONS {
            TransactionStatus::Rejected
        } else {
            TransactionStatus::Pending
        }
    }

    // Same as withdrawals: the pending branch is guarded by validation.
    fn resolve_refund(&self, amount: Decimal) -> TransactionStatus {
        if amount > Decimal::ZERO && amount <= MAX_REFUND_AMOUNT {
            TransactionStatus::Completed
        } else if amount > MAX_REFUND_AMOUNT {
            TransactionStatus::Pending
        } else {
            TransactionStatus::Cancelled
        }
    }

    fn record(
        &mut self,
        tx_type: TransactionType,
        amount: Decimal,
        source: &str,
        destination: &str,
        status: TransactionStatus,
    ) {
        let timestamp = Utc::now();
        let id = self
            .journal
            .append(tx_type, amount, source, destination, status, timestamp)
            .id;

        self.daily_count += 1;
        self.stats.transactions_processed += 1;

        info!(transaction_id = id, %status, %tx_type, %amount, "transaction journaled");

        if let Some(audit) = &self.audit_service {
            let logged = audit.log_transaction(source, &amount.to_string(), timestamp);
            let event_logged = audit.log_account_event(
                source,
                TRANSACTION_PROCESSED_EVENT,
                &format!("Transaction: {id}"),
            );
            if !logged || !event_logged {
                debug!(transaction_id = id, "audit service reported a failure");
            }
        }
    }

    /// Zero the daily volume and count
    ///
    /// The journal and lifetime stats are kept. Always succeeds.
    pub fn reset_daily_limits(&mut self) -> bool {
        self.daily_volume = Decimal::ZERO;
        self.daily_count = 0;
        info!("daily limits reset");
        true
    }

    pub fn daily_volume(&self) -> Decimal {
        self.daily_volume
    }

    /// Number of journal appends since the last reset
    pub fn transaction_count(&self) -> u32 {
        self.daily_count
    }

    pub fn journal(&self) -> &TransactionJournal {
        &self.journal
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }
}

impl Default for TransactionEngine {
    fn default() -> Self {
        Self::new()
    }
}

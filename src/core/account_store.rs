//! Account lifecycle management
//!
//! This module provides the `AccountStore` which owns every account record and
//! enforces the account status state machine:
//!
//! ```text
//! PENDING_VERIFICATION --verify/activate--> ACTIVE <--> SUSPENDED
//!          |                                  |            |
//!          +---------- risk evaluation ------> FROZEN      |
//!          |                                               |
//!          +-------------------- deactivate -------------> CLOSED (terminal)
//! ```
//!
//! The store is responsible for:
//! - Creating accounts within the per-store limit
//! - Status transitions (activate, suspend, deactivate, explicit updates)
//! - Risk evaluation that may suspend or freeze an account
//! - The verification workflow and its notification side effect

use crate::config::{
    OperatingFlags, ACCOUNT_NUMBER_OFFSET, HIGH_RISK_THRESHOLD, MAX_ACCOUNTS, MINIMUM_BALANCE,
    REVIEW_RISK_THRESHOLD,
};
use crate::core::risk::compute_risk_score;
use crate::core::traits::{
    AuthenticationService, ExternalDataService, NotificationService, ServiceSlot,
};
use crate::types::{Account, AccountId, AccountStatus, AccountType, BankError};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, info};

const VERIFICATION_EMAIL: &str = "user@example.com";
const VERIFICATION_SUBJECT: &str = "Account Verified";
const VERIFICATION_BODY: &str = "Your account has been verified successfully.";

/// Creation counters kept for observability only
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccountStoreStats {
    /// Number of successful `create_account` calls
    pub accounts_created: u64,

    /// Sum of initial balances of every created account
    pub total_managed_balance: Decimal,
}

/// Owns all accounts and their lifecycle rules
///
/// Single-owner and single-threaded: callers needing shared access must wrap
/// the store themselves.
pub struct AccountStore {
    /// Map of account numbers to account records
    accounts: HashMap<AccountId, Account>,

    /// Last allocated account number suffix
    account_counter: u64,

    suspended_account_count: u32,

    stats: AccountStoreStats,

    flags: OperatingFlags,

    auth_service: ServiceSlot<dyn AuthenticationService>,
    notification_service: ServiceSlot<dyn NotificationService>,
    data_service: ServiceSlot<dyn ExternalDataService>,
}

impl AccountStore {
    /// Create an empty store with default operating flags
    pub fn new() -> Self {
        Self::with_flags(OperatingFlags::default())
    }

    /// Create an empty store with the given operating flags
    pub fn with_flags(flags: OperatingFlags) -> Self {
        AccountStore {
            accounts: HashMap::new(),
            account_counter: ACCOUNT_NUMBER_OFFSET,
            suspended_account_count: 0,
            stats: AccountStoreStats::default(),
            flags,
            auth_service: None,
            notification_service: None,
            data_service: None,
        }
    }

    pub fn flags(&self) -> OperatingFlags {
        self.flags
    }

    /// Replace the operating flags
    pub fn set_flags(&mut self, flags: OperatingFlags) {
        self.flags = flags;
    }

    pub fn set_authentication_service(&mut self, service: Option<Rc<dyn AuthenticationService>>) {
        self.auth_service = service;
    }

    /// The attached authentication service, if any
    ///
    /// No lifecycle rule consults it yet.
    pub fn authentication_service(&self) -> Option<&Rc<dyn AuthenticationService>> {
        self.auth_service.as_ref()
    }

    pub fn set_notification_service(&mut self, service: Option<Rc<dyn NotificationService>>) {
        self.notification_service = service;
    }

    pub fn set_external_data_service(&mut self, service: Option<Rc<dyn ExternalDataService>>) {
        self.data_service = service;
    }

    /// Open a new account awaiting verification
    ///
    /// # Errors
    ///
    /// - `BelowMinimumBalance` if `initial_balance` is under 0.01
    /// - `AccountLimitReached` if the store already holds 10 accounts
    pub fn create_account(
        &mut self,
        account_type: AccountType,
        initial_balance: Decimal,
    ) -> Result<AccountId, BankError> {
        if initial_balance < MINIMUM_BALANCE {
            return Err(BankError::BelowMinimumBalance {
                balance: initial_balance,
                minimum: MINIMUM_BALANCE,
            });
        }

        if self.accounts.len() >= MAX_ACCOUNTS {
            return Err(BankError::AccountLimitReached {
                limit: MAX_ACCOUNTS,
            });
        }

        self.account_counter += 1;
        let account_number = format!("ACC{}", self.account_counter);

        self.accounts.insert(
            account_number.clone(),
            Account::new(account_number.clone(), account_type, initial_balance),
        );

        self.stats.accounts_created += 1;
        self.stats.total_managed_balance += initial_balance;

        info!(
            account = %account_number,
            account_type = %account_type,
            balance = %initial_balance,
            "account created"
        );

        Ok(account_number)
    }

    /// Move an account to `Active`
    ///
    /// Pending accounts must be verified first. Closed and frozen accounts
    /// cannot be activated. Any other account is activated as-is; the
    /// suspended counter is left unchanged.
    pub fn activate_account(&mut self, account_number: &str) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(account_number)
            .ok_or_else(|| BankError::account_not_found(account_number))?;

        match account.status {
            AccountStatus::PendingVerification if !account.is_verified => {
                return Err(BankError::not_verified(account_number));
            }
            AccountStatus::Closed => return Err(BankError::account_closed(account_number)),
            AccountStatus::Frozen => return Err(BankError::account_frozen(account_number)),
            _ => {}
        }

        account.status = AccountStatus::Active;
        info!(account = %account_number, "account activated");

        Ok(())
    }

    /// Suspend any account that is not closed
    ///
    /// The suspended counter is incremented on every successful call. The
    /// reason is logged but not stored on the record.
    pub fn suspend_account(&mut self, account_number: &str, reason: &str) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(account_number)
            .ok_or_else(|| BankError::account_not_found(account_number))?;

        if account.status == AccountStatus::Closed {
            return Err(BankError::account_closed(account_number));
        }

        account.status = AccountStatus::Suspended;
        self.suspended_account_count += 1;
        info!(account = %account_number, reason, "account suspended");

        Ok(())
    }

    /// Close an account permanently
    ///
    /// Only accounts with no remaining balance can be closed.
    pub fn deactivate_account(&mut self, account_number: &str) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(account_number)
            .ok_or_else(|| BankError::account_not_found(account_number))?;

        if account.status == AccountStatus::Closed {
            return Err(BankError::account_closed(account_number));
        }

        if account.balance > Decimal::ZERO {
            return Err(BankError::outstanding_balance(
                account_number,
                account.balance,
            ));
        }

        account.status = AccountStatus::Closed;
        info!(account = %account_number, "account closed");

        Ok(())
    }

    /// Score an account's recent activity and act on the result
    ///
    /// Scores at or above the high-risk threshold freeze the account when
    /// compliance audit mode is on, and suspend it otherwise. Lower scores
    /// only report `PendingVerification` (score above 50) or `Active`; the
    /// stored status is left untouched in those two cases.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` for unknown accounts.
    pub fn evaluate_account_risk(
        &mut self,
        account_number: &str,
        transaction_count: u32,
        volume_last_day: Decimal,
    ) -> Result<AccountStatus, BankError> {
        let account = self
            .accounts
            .get_mut(account_number)
            .ok_or_else(|| BankError::account_not_found(account_number))?;

        if let Some(data) = &self.data_service {
            let linked = data.linked_accounts(account_number);
            debug!(account = %account_number, linked = linked.len(), "linked accounts looked up");
        }

        let score = compute_risk_score(
            transaction_count,
            volume_last_day,
            account.is_verified,
            account.has_fraud_alert,
        );
        debug!(account = %account_number, score, "risk evaluated");

        if score >= HIGH_RISK_THRESHOLD && self.flags.compliance_audit_mode {
            account.status = AccountStatus::Frozen;
            info!(account = %account_number, score, "account frozen by risk evaluation");
            Ok(AccountStatus::Frozen)
        } else if score >= HIGH_RISK_THRESHOLD {
            account.status = AccountStatus::Suspended;
            self.suspended_account_count += 1;
            info!(account = %account_number, score, "account suspended by risk evaluation");
            Ok(AccountStatus::Suspended)
        } else if score > REVIEW_RISK_THRESHOLD {
            Ok(AccountStatus::PendingVerification)
        } else {
            Ok(AccountStatus::Active)
        }
    }

    /// Request an explicit status change
    ///
    /// # Errors
    ///
    /// - `AccountClosed` when leaving `Closed` (`Closed -> Closed` is allowed)
    /// - `NotVerified` / `FraudAlert` when unfreezing an unverified or flagged account
    /// - `RiskBelowThreshold` when suspending an active account scored under 75
    pub fn update_account_status(
        &mut self,
        account_number: &str,
        new_status: AccountStatus,
    ) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(account_number)
            .ok_or_else(|| BankError::account_not_found(account_number))?;

        let current = account.status;

        if current == AccountStatus::Closed && new_status != AccountStatus::Closed {
            return Err(BankError::account_closed(account_number));
        }

        if current == AccountStatus::Frozen && new_status == AccountStatus::Active {
            if !account.is_verified {
                return Err(BankError::not_verified(account_number));
            }
            if account.has_fraud_alert {
                return Err(BankError::fraud_alert(account_number));
            }
        }

        if new_status == AccountStatus::Suspended
            && account.risk_score < HIGH_RISK_THRESHOLD
            && current == AccountStatus::Active
        {
            return Err(BankError::risk_below_threshold(
                account_number,
                account.risk_score,
                HIGH_RISK_THRESHOLD,
            ));
        }

        match (current, new_status) {
            (AccountStatus::Suspended, AccountStatus::Suspended) => {}
            (AccountStatus::Suspended, _) => {
                self.suspended_account_count = self.suspended_account_count.saturating_sub(1);
            }
            (_, AccountStatus::Suspended) => self.suspended_account_count += 1,
            _ => {}
        }

        account.status = new_status;
        debug!(account = %account_number, from = %current, to = %new_status, "status updated");

        Ok(())
    }

    /// Record the outcome of an identity verification
    ///
    /// `is_verified` is set to `verified` for every known account, even when
    /// this call then returns an error. A successful verification of a pending
    /// account activates it.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` for unknown accounts (nothing is changed)
    /// - `VerificationFailed` when `verified` is false
    /// - `NotPendingVerification` when the account was not awaiting verification
    pub fn verify_account(&mut self, account_number: &str, verified: bool) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(account_number)
            .ok_or_else(|| BankError::account_not_found(account_number))?;

        account.is_verified = verified;

        if let Some(data) = &self.data_service {
            let identity = data.identity_verification_status(account_number);
            let credit = data.credit_score(account_number);
            debug!(account = %account_number, %identity, %credit, "verification data looked up");
        }

        if verified {
            if let Some(notifications) = &self.notification_service {
                if !notifications.send_email(
                    VERIFICATION_EMAIL,
                    VERIFICATION_SUBJECT,
                    VERIFICATION_BODY,
                ) {
                    debug!(account = %account_number, "verification email not delivered");
                }
            }
        }

        if !verified {
            return Err(BankError::verification_failed(account_number));
        }

        if account.status != AccountStatus::PendingVerification {
            return Err(BankError::not_pending_verification(
                account_number,
                account.status,
            ));
        }

        account.status = AccountStatus::Active;
        info!(account = %account_number, "account verified and activated");

        Ok(())
    }

    /// Current balance of an account
    pub fn get_account_balance(&self, account_number: &str) -> Result<Decimal, BankError> {
        self.accounts
            .get(account_number)
            .map(|account| account.balance)
            .ok_or_else(|| BankError::account_not_found(account_number))
    }

    pub fn get_account(&self, account_number: &str) -> Option<&Account> {
        self.accounts.get(account_number)
    }

    /// Administrative override handle
    ///
    /// Changes made through this reference bypass the state machine and the
    /// suspended counter.
    pub fn get_account_mut(&mut self, account_number: &str) -> Option<&mut Account> {
        self.accounts.get_mut(account_number)
    }

    pub fn suspended_account_count(&self) -> u32 {
        self.suspended_account_count
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn stats(&self) -> AccountStoreStats {
        self.stats
    }

    /// All accounts sorted by account number
    pub fn get_all_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.account_number.cmp(&b.account_number));
        accounts
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

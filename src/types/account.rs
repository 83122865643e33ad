//! Account-related types for the banking rules engine
//!
//! This module defines the Account record together with the account type and
//! status enums that drive the account lifecycle state machine.

use rust_decimal::Decimal;
use std::fmt;

/// Account identifier
///
/// Generated by the store as `ACC` followed by a monotonically increasing
/// number, e.g. `ACC500001`.
pub type AccountId = String;

/// Kind of account being held
///
/// Informational only. No current rule branches on the account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Checking,
    Savings,
    Investment,
    Business,
}

/// Lifecycle status of an account
///
/// New accounts start in `PendingVerification`. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountStatus {
    /// Account is open and usable
    Active,

    /// Account has been suspended, either manually or by risk evaluation
    Suspended,

    /// Account has been frozen by risk evaluation under compliance audit
    Frozen,

    /// Account is permanently closed
    Closed,

    /// Account has been created but not yet verified
    PendingVerification,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountType::Checking => "CHECKING",
            AccountType::Savings => "SAVINGS",
            AccountType::Investment => "INVESTMENT",
            AccountType::Business => "BUSINESS",
        };
        f.write_str(name)
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountStatus::Active => "ACTIVE",
            AccountStatus::Suspended => "SUSPENDED",
            AccountStatus::Frozen => "FROZEN",
            AccountStatus::Closed => "CLOSED",
            AccountStatus::PendingVerification => "PENDING_VERIFICATION",
        };
        f.write_str(name)
    }
}

/// Account record owned by the [`AccountStore`](crate::core::AccountStore)
///
/// Fields are public so that administrative overrides (through
/// `AccountStore::get_account_mut`) can set up states the state machine
/// would not reach on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique identifier, equal to the store's map key
    pub account_number: AccountId,

    pub account_type: AccountType,

    pub status: AccountStatus,

    /// Current balance. Non-negative at creation and never changed by the store.
    pub balance: Decimal,

    /// Always zero at creation, unused by any rule
    pub credit_limit: Decimal,

    /// Externally maintained risk score, read by the suspend transition rule
    pub risk_score: i32,

    pub is_verified: bool,

    pub has_fraud_alert: bool,
}

impl Account {
    /// Create a new account awaiting verification
    ///
    /// The account starts in `PendingVerification` with a zero risk score,
    /// zero credit limit, no verification and no fraud alert.
    pub fn new(account_number: AccountId, account_type: AccountType, balance: Decimal) -> Self {
        Account {
            account_number,
            account_type,
            status: AccountStatus::PendingVerification,
            balance,
            credit_limit: Decimal::ZERO,
            risk_score: 0,
            is_verified: false,
            has_fraud_alert: false,
        }
    }
}

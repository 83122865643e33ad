//! Rule configuration
//!
//! Holds the numeric limits used by the account and transaction rules and the
//! runtime [`OperatingFlags`] that switch between rule branches. The flags are
//! carried by value on each [`AccountStore`](crate::core::AccountStore) and
//! [`TransactionEngine`](crate::core::TransactionEngine) instance.

use rust_decimal::Decimal;

/// Minimum initial balance for a new account (0.01)
pub const MINIMUM_BALANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum number of accounts a single store may hold
pub const MAX_ACCOUNTS: usize = 10;

/// Risk score at or above which an account is suspended or frozen
pub const HIGH_RISK_THRESHOLD: i32 = 75;

/// Risk score above which evaluation asks for re-verification
pub const REVIEW_RISK_THRESHOLD: i32 = 50;

/// Account numbers are allocated above this offset
pub const ACCOUNT_NUMBER_OFFSET: u64 = 500_000;

/// Transaction ids are allocated above this offset
pub const TRANSACTION_ID_OFFSET: u32 = 1000;

/// Minimum amount for any transaction (0.01)
pub const MIN_TRANSACTION_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum amount for any transaction
pub const MAX_TRANSACTION_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Maximum amount for a single withdrawal
pub const MAX_WITHDRAWAL_AMOUNT: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Maximum amount for a single refund
pub const MAX_REFUND_AMOUNT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Maximum number of journaled transactions per day
pub const MAX_DAILY_TRANSACTIONS: u32 = 1000;

/// Maximum daily volume a transfer may push the engine to
pub const MAX_DAILY_VOLUME: Decimal = Decimal::from_parts(5_000_000, 0, 0, false, 0);

/// Urgent transfers above this amount are pre-screened against daily limits
pub const URGENT_TRANSFER_THRESHOLD: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Runtime switches for the rule engines
///
/// - `system_locked`: transfers are held (`PENDING`) unless urgent, in which
///   case they are only `APPROVED`
/// - `compliance_audit_mode`: high-risk accounts are frozen instead of
///   suspended during risk evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperatingFlags {
    pub system_locked: bool,
    pub compliance_audit_mode: bool,
}

impl OperatingFlags {
    /// Create flags with every switch off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the system lock switch
    pub fn with_system_locked(mut self, locked: bool) -> Self {
        self.system_locked = locked;
        self
    }

    /// Set the compliance audit switch
    pub fn with_compliance_audit_mode(mut self, enabled: bool) -> Self {
        self.compliance_audit_mode = enabled;
        self
    }
}

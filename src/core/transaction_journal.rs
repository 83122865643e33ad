//! Append-only journal of accepted transactions
//!
//! Only transactions whose outcome is accepted (`COMPLETED`, `APPROVED` or
//! `PENDING`) are ever appended. Rejected and cancelled requests leave no
//! trace here.
//!
//! # Identifier allocation
//!
//! Ids come from a single process-wide counter that starts above the
//! configured offset and never resets. Ids stay unique across daily limit
//! resets and across every engine in the process.

use crate::config::TRANSACTION_ID_OFFSET;
use crate::types::{Transaction, TransactionId, TransactionStatus, TransactionType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU32, Ordering};

/// Last transaction id handed out in this process
static LAST_TRANSACTION_ID: AtomicU32 = AtomicU32::new(TRANSACTION_ID_OFFSET);

/// Allocate the next process-wide transaction id
pub fn next_transaction_id() -> TransactionId {
    LAST_TRANSACTION_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// Append-only transaction history
pub struct TransactionJournal {
    entries: Vec<Transaction>,
}

impl TransactionJournal {
    /// Create an empty journal
    pub fn new() -> Self {
        TransactionJournal {
            entries: Vec::new(),
        }
    }

    /// Append a transaction with a freshly allocated id
    ///
    /// # Returns
    ///
    /// A reference to the stored entry
    pub fn append(
        &mut self,
        tx_type: TransactionType,
        amount: Decimal,
        source_account: &str,
        dest_account: &str,
        status: TransactionStatus,
        timestamp: DateTime<Utc>,
    ) -> &Transaction {
        let index = self.entries.len();

        self.entries.push(Transaction {
            id: next_transaction_id(),
            tx_type,
            amount,
            source_account: source_account.to_string(),
            dest_account: dest_account.to_string(),
            timestamp,
            status,
        });

        &self.entries[index]
    }

    /// All entries in append order
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently appended entry
    pub fn last(&self) -> Option<&Transaction> {
        self.entries.last()
    }
}

impl Default for TransactionJournal {
    fn default() -> Self {
        Self::new()
    }
}

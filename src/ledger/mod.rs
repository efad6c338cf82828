pub mod memory;

use rust_decimal::Decimal;
use thiserror::Error;

pub use memory::MemoryLedger;

/// Account-storage failures surfaced to the executor. Both variants are
/// per-request: they become that request's outcome and never abort a batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("account {0} not found")]
    NotFound(String),

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
}

/// Seam to the account store. The executor holds the ledger exclusively for
/// the duration of one batch, so `apply_delta` sees no interleaving writes.
pub trait Ledger {
    fn exists(&self, account_id: &str) -> bool;

    fn read_balance(&self, account_id: &str) -> Result<Decimal, LedgerError>;

    /// Applies a signed delta and returns the new balance. Atomic with
    /// respect to the balance it read: a delta that would take the balance
    /// negative fails with `InsufficientFunds` and mutates nothing.
    fn apply_delta(&mut self, account_id: &str, delta: Decimal) -> Result<Decimal, LedgerError>;
}

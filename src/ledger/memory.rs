use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::{Ledger, LedgerError};

/// In-process account store keyed by account id. Stands in for the external
/// persistent store in tests and the demo binary.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    balances: FxHashMap<String, Decimal>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the account if absent, returning whether it was created.
    /// An existing account keeps its current balance.
    pub fn open_account(&mut self, account_id: impl Into<String>, opening: Decimal) -> bool {
        let account_id = account_id.into();
        if self.balances.contains_key(&account_id) {
            return false;
        }
        debug!(account = %account_id, %opening, "opening account");
        self.balances.insert(account_id, opening);
        true
    }

    /// Removes the account, returning its final balance if it existed.
    pub fn close_account(&mut self, account_id: &str) -> Option<Decimal> {
        self.balances.remove(account_id)
    }

    pub fn accounts(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.balances.iter().map(|(id, &bal)| (id.as_str(), bal))
    }
}

impl Ledger for MemoryLedger {
    fn exists(&self, account_id: &str) -> bool {
        self.balances.contains_key(account_id)
    }

    fn read_balance(&self, account_id: &str) -> Result<Decimal, LedgerError> {
        self.balances
            .get(account_id)
            .copied()
            .ok_or_else(|| LedgerError::NotFound(account_id.to_string()))
    }

    fn apply_delta(&mut self, account_id: &str, delta: Decimal) -> Result<Decimal, LedgerError> {
        let balance = self
            .balances
            .get_mut(account_id)
            .ok_or_else(|| LedgerError::NotFound(account_id.to_string()))?;

        let updated = *balance + delta;
        if updated.is_sign_negative() && !updated.is_zero() {
            return Err(LedgerError::InsufficientFunds {
                requested: -delta,
                available: *balance,
            });
        }

        *balance = updated;
        Ok(updated)
    }
}

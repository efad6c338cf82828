use rust_decimal::Decimal;
use thiserror::Error;

use super::request::Token;

/// Intake-time validation failures. A request failing validation never
/// enters a batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("request {token}: burst time must be positive")]
    ZeroBurst { token: Token },

    #[error("request {token}: amount {amount} must be non-negative")]
    NegativeAmount { token: Token, amount: Decimal },

    #[error("request {token}: account id must not be empty")]
    EmptyAccountId { token: Token },
}

/// Batch-level failures. Both variants abort the run before any scheduling
/// work or ledger mutation happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("batch contains no requests")]
    EmptyBatch,

    #[error("unrecognized scheduling policy: {0}")]
    InvalidPolicy(String),
}

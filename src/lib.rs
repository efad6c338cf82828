//! Bank teller "token system": classic CPU-scheduling disciplines applied to
//! a batch of pending transactions, with the completion order driving
//! sequential balance updates against an account ledger. The clock is a
//! discrete simulated counter; nothing here sleeps or races.

pub mod core;
pub mod ledger;
pub mod report;
pub mod scheduler;
pub mod sim;

pub use crate::core::{Batch, BatchError, InvalidRequest, Request, Ticks, Token, TransactionKind};
pub use ledger::{Ledger, LedgerError, MemoryLedger};
pub use report::{FailureReason, Outcome, Report, ReportRow};
pub use scheduler::{schedule, Policy, Schedule, ScheduleEvent, DEFAULT_QUANTUM};
pub use sim::run_batch;

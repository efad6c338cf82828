use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Request;
use crate::scheduler::ScheduleEvent;

/// Why a request's ledger operation failed. Local to that request; the rest
/// of the batch still runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    InsufficientFunds,
    AccountNotFound,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientFunds => write!(f, "insufficient funds"),
            Self::AccountNotFound => write!(f, "account not found"),
        }
    }
}

/// Result of applying one request to the ledger. Recorded exactly once,
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success { balance: Decimal },
    Failed(FailureReason),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// One settled request: what was asked, when it ran, how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub request: Request,
    pub event: ScheduleEvent,
    pub outcome: Outcome,
}

/// Result of one batch run. Rows are in completion order; the means are
/// exact arithmetic means over all rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    rows: Vec<ReportRow>,
    mean_waiting_time: f64,
    mean_turnaround_time: f64,
}

impl Report {
    pub(crate) fn new(rows: Vec<ReportRow>) -> Self {
        let mean_waiting_time = mean(rows.iter().map(|r| r.event.waiting_time));
        let mean_turnaround_time = mean(rows.iter().map(|r| r.event.turnaround_time));
        Self {
            rows,
            mean_waiting_time,
            mean_turnaround_time,
        }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn mean_waiting_time(&self) -> f64 {
        self.mean_waiting_time
    }

    pub fn mean_turnaround_time(&self) -> f64 {
        self.mean_turnaround_time
    }

    pub fn row_for_token(&self, token: u64) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.request.token() == token)
    }
}

// Plain sum / N rather than a streaming estimator: the aggregate must equal
// the exact arithmetic mean, and tick sums stay well inside f64 integer range.
fn mean(values: impl Iterator<Item = u64>) -> f64 {
    let (sum, n) = values.fold((0u64, 0u64), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum as f64 / n as f64
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} {:>8} {:>6} {:>8} {:>11} {:>11}  {}",
            "token", "arrival", "burst", "waiting", "turnaround", "completion", "status"
        )?;
        for row in &self.rows {
            let status = match row.outcome {
                Outcome::Success { balance } => format!("success (balance {balance})"),
                Outcome::Failed(reason) => format!("failed ({reason})"),
            };
            writeln!(
                f,
                "{:>6} {:>8} {:>6} {:>8} {:>11} {:>11}  {}",
                row.request.token(),
                row.request.arrival_time(),
                row.request.burst_time(),
                row.event.waiting_time,
                row.event.turnaround_time,
                row.event.completion_time,
                status,
            )?;
        }
        writeln!(f, "average waiting time    = {:.2}", self.mean_waiting_time)?;
        write!(
            f,
            "average turnaround time = {:.2}",
            self.mean_turnaround_time
        )
    }
}

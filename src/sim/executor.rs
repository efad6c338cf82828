use tracing::{debug, warn};

use crate::core::{Request, TransactionKind};
use crate::ledger::{Ledger, LedgerError};
use crate::report::{FailureReason, Outcome, Report, ReportRow};
use crate::scheduler::Schedule;

/// Applies every request's ledger effect, one at a time, in the completion
/// order the scheduler produced. However interleaved the simulated slices
/// were, side effects are strictly sequential; per-request failures become
/// that request's outcome and never stop the walk.
pub fn execute<L: Ledger>(requests: &[Request], schedule: &Schedule, ledger: &mut L) -> Report {
    let mut rows = Vec::with_capacity(requests.len());

    for &idx in schedule.completion_order() {
        let request = &requests[idx];
        let outcome = apply(request, ledger);
        if let Outcome::Failed(reason) = outcome {
            warn!(token = request.token(), %reason, "transaction failed");
        }
        rows.push(ReportRow {
            request: request.clone(),
            event: *schedule.event(idx),
            outcome,
        });
    }

    Report::new(rows)
}

fn apply<L: Ledger>(request: &Request, ledger: &mut L) -> Outcome {
    let delta = match request.kind() {
        TransactionKind::Deposit => request.amount(),
        TransactionKind::Withdraw => -request.amount(),
    };

    match ledger.apply_delta(request.account_id(), delta) {
        Ok(balance) => {
            debug!(
                token = request.token(),
                account = request.account_id(),
                %balance,
                "transaction applied"
            );
            Outcome::Success { balance }
        }
        Err(LedgerError::NotFound(_)) => Outcome::Failed(FailureReason::AccountNotFound),
        Err(LedgerError::InsufficientFunds { .. }) => {
            Outcome::Failed(FailureReason::InsufficientFunds)
        }
    }
}

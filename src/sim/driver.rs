use tracing::debug;

use super::executor;
use crate::core::{BatchError, Request};
use crate::ledger::Ledger;
use crate::report::Report;
use crate::scheduler::{self, Policy};

/// Runs one batch end to end: validate, schedule, execute, report.
///
/// The batch owns `ledger` exclusively for the whole run. `EmptyBatch` and a
/// zero Round-Robin quantum are rejected here, before any scheduling work or
/// ledger mutation.
pub fn run_batch<L: Ledger>(
    requests: &[Request],
    policy: &Policy,
    ledger: &mut L,
) -> Result<Report, BatchError> {
    if requests.is_empty() {
        return Err(BatchError::EmptyBatch);
    }
    if let Policy::RoundRobin { quantum: 0 } = policy {
        return Err(BatchError::InvalidPolicy(
            "round-robin quantum must be positive".into(),
        ));
    }

    let schedule = scheduler::schedule(requests, policy);
    debug!(n = requests.len(), "schedule computed, applying transactions");
    Ok(executor::execute(requests, &schedule, ledger))
}

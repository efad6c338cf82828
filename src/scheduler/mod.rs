pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod sjf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BatchError, Request, Ticks};

/// Quantum used by the Round-Robin policy when the caller does not pick one.
pub const DEFAULT_QUANTUM: Ticks = 2;

/// The four scheduling disciplines. Dispatch happens through one exhaustive
/// match in [`schedule`], so adding a policy is a localized change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin { quantum: Ticks },
}

impl Policy {
    /// Maps a textual selector to a policy. Accepts the menu numbers the
    /// original token system used (`1`..`4`) as well as named selectors.
    /// Anything else, and a zero quantum, is `InvalidPolicy`.
    pub fn parse(selector: &str, quantum: Ticks) -> Result<Self, BatchError> {
        match selector.to_ascii_lowercase().as_str() {
            "1" | "fcfs" => Ok(Self::Fcfs),
            "2" | "sjf" => Ok(Self::Sjf),
            "3" | "priority" => Ok(Self::Priority),
            "4" | "rr" | "round-robin" | "roundrobin" => {
                if quantum == 0 {
                    return Err(BatchError::InvalidPolicy(
                        "round-robin quantum must be positive".into(),
                    ));
                }
                Ok(Self::RoundRobin { quantum })
            }
            other => Err(BatchError::InvalidPolicy(other.to_string())),
        }
    }
}

/// Timing metrics for one request. `turnaround_time == burst_time +
/// waiting_time` holds for every policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
    pub completion_time: Ticks,
    /// Position in the policy's execution sequence. For the preemptive
    /// policies this is the completion position.
    pub start_order: usize,
}

/// Output of one `schedule` call. `events` is indexed by intake index;
/// `completion_order` lists intake indices in the order the policy produced
/// completions, which is the order the executor must apply ledger effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    events: Vec<ScheduleEvent>,
    completion_order: Vec<usize>,
}

impl Schedule {
    pub(crate) fn new(events: Vec<ScheduleEvent>, completion_order: Vec<usize>) -> Self {
        Self {
            events,
            completion_order,
        }
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn event(&self, intake_index: usize) -> &ScheduleEvent {
        &self.events[intake_index]
    }

    pub fn completion_order(&self) -> &[usize] {
        &self.completion_order
    }
}

/// Computes per-request timing under `policy`. Pure: owns no ledger state,
/// touches nothing outside its own per-call arenas.
pub fn schedule(requests: &[Request], policy: &Policy) -> Schedule {
    debug!(n = requests.len(), ?policy, "scheduling batch");

    let schedule = match policy {
        Policy::Fcfs => fcfs::schedule(requests),
        Policy::Sjf => sjf::schedule(requests),
        Policy::Priority => priority::schedule(requests),
        Policy::RoundRobin { quantum } => round_robin::schedule(requests, *quantum),
    };

    verify(requests, &schedule);
    schedule
}

/// Intake indices stably sorted by arrival time. Ties keep intake order.
/// Shared pre-step of every policy except Priority.
fn arrival_order(requests: &[Request]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..requests.len()).collect();
    order.sort_by_key(|&i| requests[i].arrival_time());
    order
}

// Debug-build post-conditions: every request got exactly one event with the
// turnaround identity intact, and completion_order is a permutation.
fn verify(requests: &[Request], schedule: &Schedule) {
    debug_assert_eq!(schedule.events.len(), requests.len());
    debug_assert_eq!(schedule.completion_order.len(), requests.len());

    for (i, event) in schedule.events.iter().enumerate() {
        debug_assert_eq!(
            event.turnaround_time,
            requests[i].burst_time() + event.waiting_time,
            "turnaround must equal burst + waiting for request index {i}"
        );
    }

    let mut seen = vec![false; requests.len()];
    for &i in &schedule.completion_order {
        debug_assert!(!seen[i], "request index {i} completed twice");
        seen[i] = true;
    }
}

use super::{arrival_order, Schedule, ScheduleEvent};
use crate::core::{Request, Ticks};

/// Round-Robin with a fixed quantum. Repeated scans over arrival-sorted
/// order; an eligible request consumes one contiguous slice of up to
/// `quantum` units per visit, with no sub-quantum preemption. Eligibility is
/// checked against the clock as it moves within a scan, so a request that
/// arrives mid-scan can be served in the same pass.
pub(super) fn schedule(requests: &[Request], quantum: Ticks) -> Schedule {
    debug_assert!(quantum > 0, "round-robin quantum must be positive");

    let order = arrival_order(requests);
    let n = requests.len();
    let mut events = vec![ScheduleEvent::default(); n];
    let mut completion_order = Vec::with_capacity(n);

    let mut remaining: Vec<Ticks> = order.iter().map(|&i| requests[i].burst_time()).collect();
    let mut clock: Ticks = 0;
    let mut completed = 0;

    while completed < n {
        let mut served_any = false;

        for k in 0..n {
            if remaining[k] == 0 || requests[order[k]].arrival_time() > clock {
                continue;
            }
            served_any = true;

            let slice = quantum.min(remaining[k]);
            clock += slice;
            remaining[k] -= slice;

            if remaining[k] == 0 {
                let idx = order[k];
                let request = &requests[idx];
                let waiting = clock.saturating_sub(request.burst_time() + request.arrival_time());

                events[idx] = ScheduleEvent {
                    waiting_time: waiting,
                    turnaround_time: request.burst_time() + waiting,
                    completion_time: clock,
                    start_order: completion_order.len(),
                };
                completion_order.push(idx);
                completed += 1;
            }
        }

        if !served_any && completed < n {
            // A full scan found nothing eligible: idle tick, then rescan.
            clock += 1;
        }
    }

    Schedule::new(events, completion_order)
}

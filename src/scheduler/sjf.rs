use super::{arrival_order, Schedule, ScheduleEvent};
use crate::core::{Request, Ticks};

/// Shortest-Job-First, preemptive at unit granularity. The simulated clock
/// advances one tick at a time; each tick goes to the eligible request with
/// the least remaining burst, ties to the earliest arrival-sorted slot.
///
/// Waiting time is derived from the completion time, not accumulated from
/// idle ticks. Under some preemption patterns this diverges from counting
/// off-CPU ticks; that derivation is the defined semantics of this policy.
pub(super) fn schedule(requests: &[Request]) -> Schedule {
    let order = arrival_order(requests);
    let n = requests.len();
    let mut events = vec![ScheduleEvent::default(); n];
    let mut completion_order = Vec::with_capacity(n);

    // Remaining-burst arena, aligned with the arrival-sorted order and
    // discarded when this call returns.
    let mut remaining: Vec<Ticks> = order.iter().map(|&i| requests[i].burst_time()).collect();
    let mut clock: Ticks = 0;
    let mut completed = 0;

    while completed < n {
        let shortest = (0..n)
            .filter(|&k| remaining[k] > 0 && requests[order[k]].arrival_time() <= clock)
            .min_by_key(|&k| remaining[k]);

        let Some(k) = shortest else {
            // Nothing has arrived yet: idle tick.
            clock += 1;
            continue;
        };

        remaining[k] -= 1;
        clock += 1;

        if remaining[k] == 0 {
            let idx = order[k];
            let request = &requests[idx];
            let waiting = clock.saturating_sub(request.arrival_time() + request.burst_time());

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

    Schedule::new(events, completion_order)
}

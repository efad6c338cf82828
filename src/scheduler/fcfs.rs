use super::{arrival_order, Schedule, ScheduleEvent};
use crate::core::{Request, Ticks};

/// First-Come-First-Served: one pass over arrival order, each request runs
/// to completion before the next starts. Waiting time is how far the
/// previous completion overshoots this request's arrival, clamped at zero.
pub(super) fn schedule(requests: &[Request]) -> Schedule {
    let order = arrival_order(requests);
    let mut events = vec![ScheduleEvent::default(); requests.len()];

    let mut prev_completion: Ticks = 0;
    for (pos, &idx) in order.iter().enumerate() {
        let request = &requests[idx];
        let waiting = if pos == 0 {
            0
        } else {
            prev_completion.saturating_sub(request.arrival_time())
        };
        let completion = request.arrival_time() + waiting + request.burst_time();

        events[idx] = ScheduleEvent {
            waiting_time: waiting,
            turnaround_time: request.burst_time() + waiting,
            completion_time: completion,
            start_order: pos,
        };
        prev_completion = completion;
    }

    Schedule::new(events, order)
}

use super::{Schedule, ScheduleEvent};
use crate::core::Request;

/// Non-preemptive priority scheduling. All requests are treated as available
/// at once: order is priority ascending (lower value first, intake order on
/// ties) and waiting times accumulate FCFS-style over that order with no
/// arrival-time gating.
pub(super) fn schedule(requests: &[Request]) -> Schedule {
    let mut order: Vec<usize> = (0..requests.len()).collect();
    order.sort_by_key(|&i| requests[i].priority());

    let mut events = vec![ScheduleEvent::default(); requests.len()];

    let mut waiting = 0;
    for (pos, &idx) in order.iter().enumerate() {
        let burst = requests[idx].burst_time();
        events[idx] = ScheduleEvent {
            waiting_time: waiting,
            turnaround_time: burst + waiting,
            completion_time: waiting + burst,
            start_order: pos,
        };
        waiting += burst;
    }

    Schedule::new(events, order)
}

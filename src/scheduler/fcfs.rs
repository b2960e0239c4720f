use slotmap::SlotMap;
use tracing::trace;

use crate::core::{
    event::FcfsEvent,
    state::{ProcKey, ProcessRecord, Ticks},
};

/// Single pass in arrival order; stable sort keeps load order on ties.
pub(super) fn run(
    procs: &mut SlotMap<ProcKey, ProcessRecord>,
    order: &[ProcKey],
) -> Vec<FcfsEvent> {
    let mut queue: Vec<ProcKey> = order.to_vec();
    queue.sort_by_key(|&key| procs[key].arrival_time);

    let mut events = Vec::with_capacity(queue.len());
    let mut now: Ticks = 0;

    for key in queue {
        let record = &mut procs[key];
        let start = now.max(record.arrival_time);

        record.start_time = Some(start);
        record.waiting_time = start - record.arrival_time;
        now = start + record.burst_time;
        record.completion_time = Some(now);

        trace!(pid = record.pid, start, completion = now, "fcfs dispatch");
        events.push(FcfsEvent {
            pid: record.pid,
            start_time: start,
            completion_time: now,
            waiting_time: record.waiting_time,
        });
    }

    events
}

use slotmap::SlotMap;
use tracing::trace;

use crate::core::{
    event::PriorityEvent,
    state::{ProcKey, ProcessRecord, Ticks},
};

/// Non-preemptive highest-`priority + age` dispatch. Every queued process
/// that has arrived ages by one at the top of each loop iteration, so aging
/// counts dispatch-loop passes rather than elapsed clock units. Selection
/// ties go to the earliest position in the current queue order, and removal
/// is by key, never by field equality.
pub(super) fn run(
    procs: &mut SlotMap<ProcKey, ProcessRecord>,
    order: &[ProcKey],
) -> Vec<PriorityEvent> {
    let mut queue: Vec<ProcKey> = order.to_vec();
    let mut events = Vec::with_capacity(queue.len());
    let mut now: Ticks = 0;

    while !queue.is_empty() {
        for &key in &queue {
            if procs[key].arrival_time <= now {
                procs[key].age += 1;
            }
        }

        // First-encountered wins all ties.
        let mut selected: Option<(usize, i64)> = None;
        for (pos, &key) in queue.iter().enumerate() {
            let record = &procs[key];
            if record.arrival_time > now {
                continue;
            }
            let effective = record.effective_priority();
            match selected {
                Some((_, best)) if effective <= best => {}
                _ => selected = Some((pos, effective)),
            }
        }

        let Some((pos, final_priority)) = selected else {
            // Nothing has arrived yet; nothing aged this iteration either,
            // since the same arrival condition gates both.
            now += 1;
            continue;
        };

        let key = queue.remove(pos);
        let record = &mut procs[key];
        let start = now;

        record.start_time = Some(start);
        record.waiting_time = start - record.arrival_time;
        now += record.burst_time;
        record.completion_time = Some(now);

        trace!(
            pid = record.pid,
            start,
            completion = now,
            final_priority,
            "priority dispatch"
        );
        events.push(PriorityEvent {
            pid: record.pid,
            start_time: start,
            completion_time: now,
            waiting_time: record.waiting_time,
            final_priority,
        });
    }

    events
}

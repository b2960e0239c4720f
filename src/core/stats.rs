use average::{Estimate, Mean};
use serde::Serialize;

use super::event::EventMetrics;
use super::state::Ticks;

/// Aggregate timing metrics over one event sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Stats {
    pub avg_waiting_time: f64,
    pub max_waiting_time: Ticks,
    /// Maximum completion time among events that carry one; 0 when none do,
    /// which is always the case for round-robin output.
    pub total_execution_time: Ticks,
}

pub fn compute_stats<E: EventMetrics>(events: &[E]) -> Stats {
    if events.is_empty() {
        return Stats::default();
    }

    let mean: Mean = events.iter().map(|e| e.waiting_time() as f64).collect();
    let max_waiting_time = events
        .iter()
        .map(EventMetrics::waiting_time)
        .max()
        .unwrap_or(0);
    let total_execution_time = events
        .iter()
        .filter_map(EventMetrics::completion_time)
        .max()
        .unwrap_or(0);

    Stats {
        avg_waiting_time: mean.estimate(),
        max_waiting_time,
        total_execution_time,
    }
}

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use super::error::Error;

pub type Pid = u64;
pub type Ticks = u64;

new_key_type! {
    /// Identity handle for a record in the engine's working set. Queue
    /// membership and removal go through keys, never field equality.
    pub struct ProcKey;
}

/// One entry of a workload document. `arrival_time` and `priority` default
/// to 0 when absent; `pid` and `burst_time` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub pid: Pid,
    pub burst_time: i64,
    #[serde(default)]
    pub arrival_time: i64,
    #[serde(default)]
    pub priority: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub burst_time: Ticks,
    /// Service left to receive. Reset and decremented only by round-robin.
    pub remaining_time: Ticks,
    pub arrival_time: Ticks,
    pub priority: i64,
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
    pub waiting_time: Ticks,
    /// Incremented only by priority-with-aging, once per dispatch-loop
    /// iteration spent arrived-and-waiting. Never reset automatically.
    pub age: u64,
}

impl ProcessRecord {
    pub fn from_spec(spec: &ProcessSpec) -> Result<Self, Error> {
        if spec.burst_time <= 0 {
            return Err(Error::InvalidProcess {
                pid: spec.pid,
                reason: "burst_time must be positive",
            });
        }
        if spec.arrival_time < 0 {
            return Err(Error::InvalidProcess {
                pid: spec.pid,
                reason: "arrival_time must be non-negative",
            });
        }

        Ok(Self {
            pid: spec.pid,
            burst_time: spec.burst_time as Ticks,
            remaining_time: spec.burst_time as Ticks,
            arrival_time: spec.arrival_time as Ticks,
            priority: spec.priority,
            start_time: None,
            completion_time: None,
            waiting_time: 0,
            age: 0,
        })
    }

    /// Priority at this instant, aging included.
    pub fn effective_priority(&self) -> i64 {
        self.priority + self.age as i64
    }

    /// Independent copy with all derived state zeroed, as if the record had
    /// just been loaded.
    pub fn fresh(&self) -> Self {
        Self {
            pid: self.pid,
            burst_time: self.burst_time,
            remaining_time: self.burst_time,
            arrival_time: self.arrival_time,
            priority: self.priority,
            start_time: None,
            completion_time: None,
            waiting_time: 0,
            age: 0,
        }
    }
}

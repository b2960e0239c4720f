pub mod core;
pub mod scheduler;
pub mod sim;

pub use crate::core::{
    DispatchEvent, Error, EventMetrics, FcfsEvent, Pid, PriorityEvent, ProcessRecord, ProcessSpec,
    SliceEvent, Stats, Ticks, compute_stats,
};
pub use scheduler::SchedulerEngine;
pub use sim::{Workload, bernoulli_workload};

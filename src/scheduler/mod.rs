pub mod fcfs;
pub mod priority;
pub mod round_robin;

use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use tracing::debug;

use crate::core::{
    Error,
    event::{FcfsEvent, PriorityEvent, SliceEvent},
    state::{Pid, ProcKey, ProcessRecord, ProcessSpec, Ticks},
};

/// Owns the working set of process records and dispatches it under one of
/// three policies. Each run mutates the records in place; `age` in
/// particular is never reset between runs, so a caller comparing policies
/// over the same workload should run each on a [`snapshot`](Self::snapshot)
/// rather than back-to-back on one engine.
///
/// Not safe for concurrent invocation of two runs over the same working set.
#[derive(Debug, Clone, Default)]
pub struct SchedulerEngine {
    procs: SlotMap<ProcKey, ProcessRecord>,
    // Load order; doubles as the initial queue order for every policy.
    order: Vec<ProcKey>,
}

impl SchedulerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the working set with fresh records built from `specs`, in
    /// the given order.
    pub fn load(&mut self, specs: &[ProcessSpec]) -> Result<(), Error> {
        let mut seen: FxHashSet<Pid> = FxHashSet::default();
        let mut procs = SlotMap::with_capacity_and_key(specs.len());
        let mut order = Vec::with_capacity(specs.len());

        for spec in specs {
            if !seen.insert(spec.pid) {
                return Err(Error::InvalidProcess {
                    pid: spec.pid,
                    reason: "duplicate pid",
                });
            }
            let record = ProcessRecord::from_spec(spec)?;
            order.push(procs.insert(record));
        }

        self.procs = procs;
        self.order = order;
        debug!(count = self.order.len(), "working set loaded");
        Ok(())
    }

    /// Independent engine whose records are rebuilt with zeroed derived
    /// state (`remaining_time` back to burst, no start/completion, zero
    /// waiting and age), preserving load order.
    pub fn snapshot(&self) -> Self {
        let mut procs = SlotMap::with_capacity_and_key(self.order.len());
        let order = self
            .order
            .iter()
            .map(|&key| procs.insert(self.procs[key].fresh()))
            .collect();
        Self { procs, order }
    }

    /// Records in load order.
    pub fn processes(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.order.iter().map(|&key| &self.procs[key])
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Non-preemptive dispatch in arrival order, load order breaking ties.
    pub fn run_fcfs(&mut self) -> Vec<FcfsEvent> {
        debug!(count = self.order.len(), "running fcfs");
        fcfs::run(&mut self.procs, &self.order)
    }

    /// Time-sliced dispatch with the queue seeded in load order. Fails with
    /// [`Error::InvalidParameter`] when `quantum` is zero.
    pub fn run_round_robin(&mut self, quantum: Ticks) -> Result<Vec<SliceEvent>, Error> {
        debug!(count = self.order.len(), quantum, "running round-robin");
        round_robin::run(&mut self.procs, &self.order, quantum)
    }

    /// Non-preemptive dispatch by highest `priority + age`, aging every
    /// arrived waiter once per dispatch-loop iteration.
    pub fn run_priority_with_aging(&mut self) -> Vec<PriorityEvent> {
        debug!(count = self.order.len(), "running priority-with-aging");
        priority::run(&mut self.procs, &self.order)
    }
}

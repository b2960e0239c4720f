use serde::Serialize;

use super::state::{Pid, Ticks};

/// One completed process under first-come-first-served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FcfsEvent {
    pub pid: Pid,
    pub start_time: Ticks,
    pub completion_time: Ticks,
    pub waiting_time: Ticks,
}

/// One round-robin dispatch of up to a quantum of service. Carries no
/// completion time: final per-pid completion stays internal to the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceEvent {
    pub pid: Pid,
    pub start_time: Ticks,
    pub execution_time: Ticks,
    /// Running waiting total for this pid as of this dispatch.
    pub waiting_time: Ticks,
}

/// One completed process under priority-with-aging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityEvent {
    pub pid: Pid,
    pub start_time: Ticks,
    pub completion_time: Ticks,
    pub waiting_time: Ticks,
    /// `priority + age` at the moment of selection.
    pub final_priority: i64,
}

/// Closed union over the per-algorithm event shapes, for callers that hand a
/// mixed sequence to reporting or visualization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DispatchEvent {
    Fcfs(FcfsEvent),
    Slice(SliceEvent),
    Priority(PriorityEvent),
}

impl From<FcfsEvent> for DispatchEvent {
    fn from(e: FcfsEvent) -> Self {
        Self::Fcfs(e)
    }
}

impl From<SliceEvent> for DispatchEvent {
    fn from(e: SliceEvent) -> Self {
        Self::Slice(e)
    }
}

impl From<PriorityEvent> for DispatchEvent {
    fn from(e: PriorityEvent) -> Self {
        Self::Priority(e)
    }
}

/// Common projection shared by every event shape. `completion_time` is
/// `None` for shapes that do not carry one.
pub trait EventMetrics {
    fn pid(&self) -> Pid;
    fn start_time(&self) -> Ticks;
    fn waiting_time(&self) -> Ticks;

    fn completion_time(&self) -> Option<Ticks> {
        None
    }
}

impl EventMetrics for FcfsEvent {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn start_time(&self) -> Ticks {
        self.start_time
    }

    fn waiting_time(&self) -> Ticks {
        self.waiting_time
    }

    fn completion_time(&self) -> Option<Ticks> {
        Some(self.completion_time)
    }
}

impl EventMetrics for SliceEvent {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn start_time(&self) -> Ticks {
        self.start_time
    }

    fn waiting_time(&self) -> Ticks {
        self.waiting_time
    }
}

impl EventMetrics for PriorityEvent {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn start_time(&self) -> Ticks {
        self.start_time
    }

    fn waiting_time(&self) -> Ticks {
        self.waiting_time
    }

    fn completion_time(&self) -> Option<Ticks> {
        Some(self.completion_time)
    }
}

impl EventMetrics for DispatchEvent {
    fn pid(&self) -> Pid {
        match self {
            Self::Fcfs(e) => e.pid(),
            Self::Slice(e) => e.pid(),
            Self::Priority(e) => e.pid(),
        }
    }

    fn start_time(&self) -> Ticks {
        match self {
            Self::Fcfs(e) => e.start_time(),
            Self::Slice(e) => e.start_time(),
            Self::Priority(e) => e.start_time(),
        }
    }

    fn waiting_time(&self) -> Ticks {
        match self {
            Self::Fcfs(e) => e.waiting_time(),
            Self::Slice(e) => e.waiting_time(),
            Self::Priority(e) => e.waiting_time(),
        }
    }

    fn completion_time(&self) -> Option<Ticks> {
        match self {
            Self::Fcfs(e) => e.completion_time(),
            Self::Slice(e) => e.completion_time(),
            Self::Priority(e) => e.completion_time(),
        }
    }
}

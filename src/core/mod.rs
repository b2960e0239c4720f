pub mod error;
pub mod event;
pub mod state;
pub mod stats;

pub use error::Error;
pub use event::{DispatchEvent, EventMetrics, FcfsEvent, PriorityEvent, SliceEvent};
pub use state::{Pid, ProcKey, ProcessRecord, ProcessSpec, Ticks};
pub use stats::{Stats, compute_stats};

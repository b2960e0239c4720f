use super::state::{Pid, Ticks};

/// Errors surfaced by workload loading and the scheduling engine. All are
/// raised synchronously at the offending call and never retried internally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workload document could not be read.
    #[error("failed to read workload: {0}")]
    Io(#[from] std::io::Error),

    /// Workload document is malformed or missing a required field.
    #[error("invalid workload spec: {0}")]
    Validation(#[from] serde_json::Error),

    /// A process spec carries an out-of-range value.
    #[error("process {pid}: {reason}")]
    InvalidProcess { pid: Pid, reason: &'static str },

    /// Round-robin quantum must be positive.
    #[error("quantum must be greater than zero (got {quantum})")]
    InvalidParameter { quantum: Ticks },
}

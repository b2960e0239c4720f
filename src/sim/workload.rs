use std::fs;
use std::path::Path;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Pid, ProcessSpec, Ticks};

/// A workload document: `{"processes": [{"pid": …, "burst_time": …, …}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Seeded random workload: each tick a process arrives with probability
/// `p_arrival`, short with probability `p_short`, priority drawn from
/// `0..=4`. Deterministic for a given seed.
pub fn bernoulli_workload(
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_burst: Ticks,
    long_burst: Ticks,
    seed: u64,
) -> Workload {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut processes = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_burst
            } else {
                long_burst
            };

            processes.push(ProcessSpec {
                pid: processes.len() as Pid + 1,
                burst_time: burst as i64,
                arrival_time: t as i64,
                priority: rng.random_range(0..5),
            });
        }
    }

    Workload { processes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_document_with_defaults() {
        let workload: Workload = serde_json::from_str(
            r#"{"processes": [
                {"pid": 1, "burst_time": 5, "arrival_time": 0, "priority": 1},
                {"pid": 2, "burst_time": 3}
            ]}"#,
        )
        .unwrap();

        assert_eq!(workload.processes.len(), 2);
        assert_eq!(workload.processes[1].arrival_time, 0);
        assert_eq!(workload.processes[1].priority, 0);
    }

    #[test]
    fn missing_required_field_is_a_validation_error() {
        let result: Result<Workload, _> =
            serde_json::from_str(r#"{"processes": [{"pid": 1}]}"#).map_err(Error::from);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = bernoulli_workload(50, 0.3, 0.5, 2, 6, 7);
        let b = bernoulli_workload(50, 0.3, 0.5, 2, 6, 7);
        assert_eq!(a, b);
        assert!(!a.processes.is_empty());

        for (i, spec) in a.processes.iter().enumerate() {
            assert_eq!(spec.pid, i as Pid + 1);
            assert!(spec.burst_time == 2 || spec.burst_time == 6);
            assert!(spec.arrival_time >= 0 && spec.arrival_time < 50);
        }
    }
}

pub mod workload;

pub use workload::{Workload, bernoulli_workload};
